//! Poll detail page
//!
//! Draws a [`RenderedView`] produced by the core renderer. The page holds no
//! state of its own; the application re-renders it whenever the view changes.

use iocraft::prelude::*;
use pollview_core::RenderedView;

#[derive(Default, Props)]
pub struct PollDetailPageProps {
    pub poll_id: String,
    pub rendered: Option<RenderedView>,
}

#[component]
pub fn PollDetailPage(props: &PollDetailPageProps) -> impl Into<AnyElement<'static>> {
    let body = props
        .rendered
        .as_ref()
        .map(rendered_elements)
        .unwrap_or_default();

    element! {
        View(key: "poll-detail-page", flex_direction: FlexDirection::Column, padding_left: 1) {
            Text(content: format!("Poll {}", props.poll_id), color: Color::DarkGrey)
            #(body)
        }
    }
}

/// Terminal elements for one rendering, in display order
pub fn rendered_elements(rendered: &RenderedView) -> Vec<AnyElement<'static>> {
    match rendered {
        RenderedView::Loading { message } => vec![element! {
            Text(content: message.clone(), color: Color::Yellow)
        }
        .into()],
        RenderedView::Error { message } => vec![element! {
            Text(content: message.clone(), color: Color::Red, weight: Weight::Bold)
        }
        .into()],
        RenderedView::NotFound { message } => vec![element! {
            Text(content: message.clone(), color: Color::Yellow, weight: Weight::Bold)
        }
        .into()],
        RenderedView::Poll {
            title,
            description,
            questions,
            empty_message,
        } => {
            let mut elements: Vec<AnyElement<'static>> = vec![
                element! { Text(content: title.clone(), color: Color::Cyan, weight: Weight::Bold) }
                    .into(),
                element! { Text(content: description.clone(), color: Color::White) }.into(),
            ];

            if let Some(message) = empty_message {
                elements.push(
                    element! {
                        View(margin_top: 1) {
                            Text(content: message.clone(), color: Color::DarkGrey)
                        }
                    }
                    .into(),
                );
            }

            for (position, question) in questions.iter().enumerate() {
                elements.push(
                    element! {
                        View(
                            key: format!("question-{}-{}", position, question.key),
                            flex_direction: FlexDirection::Column,
                            margin_top: 1,
                        ) {
                            Text(content: question.text.clone(), weight: Weight::Bold)
                            #(question.choices.iter().enumerate().map(|(index, choice)| element! {
                                Text(
                                    key: format!("choice-{}-{}", index, choice.key),
                                    content: format!("  {}. {}", index + 1, choice.text),
                                    color: if choice.placeholder { Color::DarkGrey } else { Color::White },
                                )
                            }))
                        }
                    }
                    .into(),
                );
            }

            elements
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollview_core::{render, Choice, Poll, Question, ViewState};

    #[test]
    fn test_status_renderings_are_single_elements() {
        for state in [
            ViewState::Loading,
            ViewState::NotFound,
            ViewState::Error("Failed to fetch poll with ID 1".into()),
        ] {
            assert_eq!(rendered_elements(&render(&state)).len(), 1);
        }
    }

    #[test]
    fn test_poll_elements() {
        let poll = Poll::new("Lunch", "Pick one")
            .with_question(Question::new(1, "Where?").with_choice(Choice::new(1, "Thai")))
            .with_question(Question::new(2, "When?"));
        // title, description, one element per question
        assert_eq!(rendered_elements(&render(&ViewState::Loaded(poll))).len(), 4);

        let empty = Poll::new("Empty", "");
        // title, description, empty message
        assert_eq!(rendered_elements(&render(&ViewState::Loaded(empty))).len(), 3);
    }
}
