/// A container of list items that can be cleared and appended to.
pub trait ListContainer {
    /// Remove every item currently in the container.
    fn clear_items(&mut self);

    /// Append one item after the existing ones.
    fn append_item(&mut self, text: String);
}

impl ListContainer for Vec<String> {
    fn clear_items(&mut self) {
        self.clear();
    }

    fn append_item(&mut self, text: String) {
        self.push(text);
    }
}

/// Replace the contents of `container` with one item per entry of `items`,
/// in input order.
///
/// The container is always cleared first, so rendering the same items twice
/// leaves exactly one copy of each.
pub fn render_list<C, I, S>(container: &mut C, items: I)
where
    C: ListContainer + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    container.clear_items();
    for item in items {
        container.append_item(item.into());
    }
}
