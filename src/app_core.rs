use std::cell::RefCell;
use std::rc::Rc;

use cartela_core::{resolve_tab, Card, CardError, CardStatus, KeyValueStore, Tab};

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

pub(crate) struct AppCore {
    state: RefCell<AppState>,
    storage: Rc<dyn KeyValueStore>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AppSnapshot {
    pub(crate) booted: bool,
    pub(crate) card: Card,
    pub(crate) status: CardStatus,
    pub(crate) tab: Tab,
    pub(crate) notice: Option<String>,
    pub(crate) revision: u64,
}

impl AppSnapshot {
    pub(crate) fn status_line(&self) -> String {
        self.notice
            .clone()
            .unwrap_or_else(|| self.status.message())
    }
}

struct AppState {
    booted: bool,
    card: Card,
    tab: Tab,
    notice: Option<String>,
    revision: u64,
}

impl AppState {
    fn new() -> Self {
        Self {
            booted: false,
            card: Card::new(),
            tab: Tab::Config,
            notice: None,
            revision: 0,
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.tab = resolve_tab(self.tab, &self.card.status());
    }
}

impl AppCore {
    pub(crate) fn new(storage: Rc<dyn KeyValueStore>) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(AppState::new()),
            storage,
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    pub(crate) fn snapshot(&self) -> AppSnapshot {
        let state = self.state.borrow();
        AppSnapshot {
            booted: state.booted,
            card: state.card.clone(),
            status: state.card.status(),
            tab: state.tab,
            notice: state.notice.clone(),
            revision: state.revision,
        }
    }

    /// Runs the startup sequence against the fetched word source (`None`
    /// when the fetch failed). Returns whether the word list changed since
    /// the previous visit.
    pub(crate) fn boot(&self, word_source: Option<&str>) -> bool {
        let boot = Card::boot(self.storage.as_ref(), word_source);
        log_issues("boot", &boot.issues);
        let changed = boot.card.words_changed();
        {
            let mut state = self.state.borrow_mut();
            state.card = boot.card;
            state.booted = true;
            state.bump();
        }
        gloo::console::log!(
            "selections: loaded",
            self.snapshot().status.message()
        );
        self.notify();
        changed
    }

    pub(crate) fn choose_word(&self, cell: usize, word: &str) {
        let result = {
            let mut state = self.state.borrow_mut();
            let result = state.card.choose(self.storage.as_ref(), cell, word);
            state.bump();
            result
        };
        if let Err(err) = result {
            log_issues("choose", &[err]);
        }
        self.notify();
    }

    pub(crate) fn clear_cell(&self, cell: usize) {
        let result = {
            let mut state = self.state.borrow_mut();
            let result = state.card.clear(self.storage.as_ref(), cell);
            state.bump();
            result
        };
        if let Err(err) = result {
            log_issues("clear", &[err]);
        }
        self.notify();
    }

    /// Switching to a hidden play tab is refused.
    pub(crate) fn select_tab(&self, tab: Tab) -> bool {
        let accepted = {
            let mut state = self.state.borrow_mut();
            let next = resolve_tab(tab, &state.card.status());
            if next != tab {
                return false;
            }
            if state.tab == next {
                false
            } else {
                state.tab = next;
                true
            }
        };
        if accepted {
            self.notify();
        }
        true
    }

    pub(crate) fn show_notice(&self, text: &str) {
        self.state.borrow_mut().notice = Some(text.to_string());
        self.notify();
    }

    pub(crate) fn clear_notice(&self) {
        let cleared = self.state.borrow_mut().notice.take().is_some();
        if cleared {
            self.notify();
        }
    }
}

fn log_issues(context: &str, issues: &[CardError]) {
    for issue in issues {
        gloo::console::warn!(format!("{context}: {issue}"));
    }
}

pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartela_core::{MemoryStore, FREE_CELL, SELECTIONS_KEY};
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn source(count: usize) -> String {
        let words: Vec<String> = (0..count).map(|i| format!("w{i:02}")).collect();
        serde_json::to_string(&words).unwrap()
    }

    fn fill_all(core: &AppCore) {
        for (n, cell) in (0..25).filter(|cell| *cell != FREE_CELL).enumerate() {
            core.choose_word(cell, &format!("w{n:02}"));
        }
    }

    #[wasm_bindgen_test]
    fn boot_notifies_subscribers() {
        let core = AppCore::new(Rc::new(MemoryStore::new()));
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _subscription = core.subscribe(Rc::new(move || counter.set(counter.get() + 1)));
        assert!(!core.boot(Some(&source(24))));
        assert_eq!(calls.get(), 1);
        assert!(core.snapshot().booted);
    }

    #[wasm_bindgen_test]
    fn dropped_subscription_stops_notifications() {
        let core = AppCore::new(Rc::new(MemoryStore::new()));
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let subscription = core.subscribe(Rc::new(move || counter.set(counter.get() + 1)));
        drop(subscription);
        core.boot(Some(&source(24)));
        assert_eq!(calls.get(), 0);
    }

    #[wasm_bindgen_test]
    fn play_tab_follows_fill_state() {
        let storage = Rc::new(MemoryStore::new());
        let core = AppCore::new(storage.clone());
        core.boot(Some(&source(24)));
        assert!(!core.select_tab(Tab::Play));
        assert_eq!(core.snapshot().tab, Tab::Config);

        fill_all(&core);
        assert_eq!(core.snapshot().status_line(), "Células preenchidas: 24 / 24");
        assert!(core.select_tab(Tab::Play));
        assert_eq!(core.snapshot().tab, Tab::Play);

        core.clear_cell(0);
        let snapshot = core.snapshot();
        assert_eq!(snapshot.tab, Tab::Config);
        assert_eq!(snapshot.status_line(), "Células preenchidas: 23 / 24");
        assert!(storage.get(SELECTIONS_KEY).unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn every_edit_bumps_the_revision() {
        let core = AppCore::new(Rc::new(MemoryStore::new()));
        core.boot(Some(&source(24)));
        let before = core.snapshot().revision;
        core.choose_word(0, "w00");
        core.clear_cell(0);
        assert_eq!(core.snapshot().revision, before + 2);
    }

    #[wasm_bindgen_test]
    fn notice_overrides_status_until_cleared() {
        let storage = Rc::new(MemoryStore::new());
        AppCore::new(storage.clone()).boot(Some(&source(24)));
        let core = AppCore::new(storage);
        assert!(core.boot(Some(&source(25))));
        core.show_notice("changed");
        assert_eq!(core.snapshot().status_line(), "changed");
        core.clear_notice();
        assert_eq!(core.snapshot().status_line(), "Células preenchidas: 0 / 24");
    }
}
