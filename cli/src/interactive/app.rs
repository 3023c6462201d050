//! Interactive poll browser built on iocraft
//!
//! A path prompt drives the router; the `/poll/:pollId` route mounts a
//! [`PollDetailView`] whose loads complete through a [`PollLoader`] broadcast.

use crate::interactive::loader::PollLoader;
use crate::interactive::pages::{HomePage, PollDetailPage};
use crate::router::{app_router_config, AppRoute, RouteMatch, Router};
use anyhow::Result;
use iocraft::prelude::*;
use pollview_core::{HttpPollClient, PollDetailView, ResolvedApiConfig};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

/// Everything the application component needs from the outside
#[derive(Clone)]
pub struct InteractiveContext {
    pub loader: PollLoader,
    pub router: Router,
    pub base_url: String,
    pub initial_path: Option<String>,
}

#[derive(Default, Props)]
pub struct PollViewAppProps {
    pub context: Option<InteractiveContext>,
}

/// Run the interactive application until the user quits
pub async fn run_interactive(config: ResolvedApiConfig, initial_path: Option<String>) -> Result<()> {
    let base_url = config.base_url.clone();
    let client = HttpPollClient::new(config)?;
    let context = InteractiveContext {
        loader: PollLoader::new(Arc::new(client)),
        router: Router::new(app_router_config()?)?,
        base_url,
        initial_path,
    };

    tokio::task::spawn_blocking(move || {
        smol::block_on(async move {
            element!(PollViewApp(context: Some(context)))
                .render_loop()
                .await
        })
    })
    .await??;

    Ok(())
}

/// Navigate to `path` and mount whatever it names
fn open_path(
    path: &str,
    mut router: State<Router>,
    view: State<Option<PollDetailView>>,
    mut notice: State<Option<String>>,
    loader: &PollLoader,
) {
    let navigated = router.write().navigate(path);
    match navigated {
        Ok(matched) => show_route(&matched, view, notice, loader),
        Err(err) => notice.set(Some(err.to_string())),
    }
}

/// Mount the view for a route, starting a load when the poll changes
fn show_route(
    matched: &RouteMatch,
    mut view: State<Option<PollDetailView>>,
    mut notice: State<Option<String>>,
    loader: &PollLoader,
) {
    match AppRoute::from_match(matched) {
        Ok(AppRoute::Home) => {
            view.set(None);
            notice.set(None);
        }
        Ok(AppRoute::PollDetail(poll_id)) => {
            notice.set(None);
            let ticket = {
                let mut slot = view.write();
                match slot.as_mut() {
                    Some(current) => current.set_poll_id(poll_id),
                    None => {
                        let (mounted, ticket) = PollDetailView::mount(poll_id);
                        *slot = Some(mounted);
                        Some(ticket)
                    }
                }
            };
            if let Some(ticket) = ticket {
                loader.spawn(ticket);
            }
        }
        Err(err) => notice.set(Some(err.to_string())),
    }
}

#[component]
pub fn PollViewApp(mut hooks: Hooks, props: &PollViewAppProps) -> impl Into<AnyElement<'static>> {
    let Some(context) = props.context.clone() else {
        let missing: AnyElement<'static> = element! {
            Text(content: "No poll service configured.", color: Color::Red)
        }
        .into();
        return missing;
    };

    let mut system = hooks.use_context_mut::<SystemContext>();
    let input = hooks.use_state(String::new);
    let router = hooks.use_state({
        let router = context.router.clone();
        move || router
    });
    let view = hooks.use_state(|| None::<PollDetailView>);
    let notice = hooks.use_state(|| None::<String>);
    let should_exit = hooks.use_state(|| false);

    // Apply load completions; the view discards stale ones itself
    hooks.use_future({
        let loader = context.loader.clone();
        let initial_path = context.initial_path.clone();
        let mut view = view;
        async move {
            let mut completions = loader.subscribe();

            if let Some(path) = initial_path {
                open_path(&path, router, view, notice, &loader);
            }

            loop {
                match completions.recv().await {
                    Ok(event) => {
                        let mut slot = view.write();
                        match slot.as_mut() {
                            Some(current) => {
                                let applied = current.complete(&event.ticket, event.outcome);
                                debug!("Completion for {}: {:?}", event.ticket.poll_id(), applied);
                            }
                            None => debug!("Dropping completion, no poll view mounted"),
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Skipped {} poll completions", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    hooks.use_terminal_events({
        let loader = context.loader.clone();
        let mut input = input;
        let mut router = router;
        let mut should_exit = should_exit;
        move |event| {
            if let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            {
                if kind == KeyEventKind::Release {
                    return;
                }
                match code {
                    KeyCode::Esc => should_exit.set(true),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        should_exit.set(true)
                    }
                    KeyCode::Char(c) => input.write().push(c),
                    KeyCode::Backspace => {
                        input.write().pop();
                    }
                    KeyCode::Enter => {
                        let path = input.read().trim().to_string();
                        if !path.is_empty() {
                            input.set(String::new());
                            open_path(&path, router, view, notice, &loader);
                        }
                    }
                    KeyCode::Up => {
                        let previous = router.write().go_back().cloned();
                        if let Some(matched) = previous {
                            show_route(&matched, view, notice, &loader);
                        }
                    }
                    _ => {}
                }
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let (route_name, current_path, can_go_back) = {
        let router = router.read();
        let name = router
            .current_route()
            .map(|route| route.name.clone())
            .unwrap_or_default();
        (name, router.current().path.clone(), router.can_go_back())
    };
    let page: AnyElement<'static> = match view.read().as_ref() {
        Some(current) => element! {
            PollDetailPage(poll_id: current.poll_id().to_string(), rendered: Some(current.render()))
        }
        .into(),
        None => element!(HomePage).into(),
    };
    let prompt = format!("> {}", input.read().as_str());
    let status = format!("{} {}  ·  {}", route_name, current_path, context.base_url);
    let key_hint = if can_go_back {
        "Enter: open path  ↑: back  Esc: quit"
    } else {
        "Enter: open path  Esc: quit"
    };
    let notice_line = notice.read().clone();

    let app: AnyElement<'static> = element! {
        View(flex_direction: FlexDirection::Column, width: 100pct, padding: 1) {
            View(
                border_style: BorderStyle::Round,
                border_color: Color::Blue,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: prompt, color: Color::White)
            }
            Text(content: status, color: Color::DarkGrey)
            #(notice_line.map(|message| element! {
                Text(content: message, color: Color::Red)
            }))
            View(margin_top: 1) {
                #(Some(page))
            }
            View(margin_top: 1) {
                Text(content: key_hint, color: Color::DarkGrey)
            }
        }
    }
    .into();
    app
}
