//! A list container rendering one `<li>` per string.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ItemListProps {
    /// DOM id of the container
    pub id: String,
    pub items: Vec<String>,
}

/// Renders exactly `items`, in order. Items from a previous render are
/// replaced, never appended to.
#[component]
pub fn ItemList(props: ItemListProps) -> Element {
    rsx! {
        ul {
            id: "{props.id}",
            style: "margin: 4px 0; padding-left: 20px;",
            for (index, item) in props.items.iter().enumerate() {
                li {
                    key: "{index}",
                    "{item}"
                }
            }
        }
    }
}
