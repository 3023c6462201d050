//! Landing page shown on the `/` route

use iocraft::prelude::*;

#[component]
pub fn HomePage(_hooks: Hooks) -> impl Into<AnyElement<'static>> {
    element! {
        View(key: "home-page", flex_direction: FlexDirection::Column, padding_left: 1) {
            Text(content: "Type a poll path such as /poll/1 and press Enter.", color: Color::White)
            Text(content: "Press ↑ to return to the previous path.", color: Color::DarkGrey)
        }
    }
}
