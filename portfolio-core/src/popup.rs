//! Single-open popup bookkeeping for map info windows.
//!
//! The slot owns the handle of whichever popup is currently open. Opening a
//! popup through the slot closes the previous one first, so at most one popup
//! is open at any time.

/// A popup that can be opened and closed, e.g. a map info window.
pub trait Popup {
    /// Stable identity, used to tell whether a click targets the open popup.
    fn popup_id(&self) -> usize;

    fn open(&self);

    fn close(&self);
}

/// Owner of the at-most-one open popup.
#[derive(Debug)]
pub struct PopupSlot<P: Popup> {
    open: Option<P>,
}

impl<P: Popup> Default for PopupSlot<P> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<P: Popup> PopupSlot<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `popup`, closing a different popup that is currently open.
    pub fn show(&mut self, popup: P) {
        if let Some(previous) = self.open.take() {
            if previous.popup_id() != popup.popup_id() {
                previous.close();
            }
        }
        popup.open();
        self.open = Some(popup);
    }

    #[cfg(test)]
    fn open_id(&self) -> Option<usize> {
        self.open.as_ref().map(Popup::popup_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    /// Records which popups the map currently shows.
    #[derive(Clone)]
    struct FakeWindow {
        id: usize,
        shown: Rc<RefCell<BTreeSet<usize>>>,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl Popup for FakeWindow {
        fn popup_id(&self) -> usize {
            self.id
        }

        fn open(&self) {
            self.shown.borrow_mut().insert(self.id);
            self.events.borrow_mut().push(format!("open {}", self.id));
        }

        fn close(&self) {
            self.shown.borrow_mut().remove(&self.id);
            self.events.borrow_mut().push(format!("close {}", self.id));
        }
    }

    fn windows(n: usize) -> (Vec<FakeWindow>, Rc<RefCell<BTreeSet<usize>>>, Rc<RefCell<Vec<String>>>) {
        let shown = Rc::new(RefCell::new(BTreeSet::new()));
        let events = Rc::new(RefCell::new(Vec::new()));
        let windows = (0..n)
            .map(|id| FakeWindow {
                id,
                shown: shown.clone(),
                events: events.clone(),
            })
            .collect();
        (windows, shown, events)
    }

    #[test]
    fn test_first_click_opens_without_closing() {
        let (windows, shown, events) = windows(4);
        let mut slot = PopupSlot::new();
        slot.show(windows[0].clone());
        assert_eq!(*events.borrow(), vec!["open 0"]);
        assert_eq!(shown.borrow().len(), 1);
        assert_eq!(slot.open_id(), Some(0));
    }

    #[test]
    fn test_clicking_another_closes_previous_first() {
        let (windows, shown, events) = windows(4);
        let mut slot = PopupSlot::new();
        slot.show(windows[0].clone());
        slot.show(windows[2].clone());
        assert_eq!(*events.borrow(), vec!["open 0", "close 0", "open 2"]);
        assert_eq!(shown.borrow().iter().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(slot.open_id(), Some(2));
    }

    #[test]
    fn test_at_most_one_open_across_many_clicks() {
        let (windows, shown, _) = windows(4);
        let mut slot = PopupSlot::new();
        for i in [0, 1, 1, 3, 2, 0, 3, 3] {
            slot.show(windows[i].clone());
            assert_eq!(shown.borrow().len(), 1);
            assert_eq!(slot.open_id(), Some(i));
        }
    }

    #[test]
    fn test_reclicking_open_window_keeps_it_open() {
        let (windows, shown, events) = windows(2);
        let mut slot = PopupSlot::new();
        slot.show(windows[1].clone());
        slot.show(windows[1].clone());
        assert_eq!(*events.borrow(), vec!["open 1", "open 1"]);
        assert!(shown.borrow().contains(&1));
    }
}
