use std::rc::Rc;

use cartela_core::WORDS_CHANGED_NOTICE;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;

use crate::app_config::{load_app_config, AppConfig, NOTICE_DURATION_MS};
use crate::app_core::AppCore;
use crate::boot;
use crate::local_store::open_storage;
use crate::word_fetch::fetch_word_source;
use crate::yew_app;

struct BootCoordinator {
    core: Rc<AppCore>,
    config: AppConfig,
}

impl BootCoordinator {
    async fn run(self) {
        boot::set_phase("words");
        let word_source = match fetch_word_source(&self.config.words_url).await {
            Ok(raw) => Some(raw),
            Err(err) => {
                gloo::console::error!(
                    "word source: fetch failed",
                    self.config.words_url.clone(),
                    err
                );
                None
            }
        };

        boot::set_phase("card");
        let changed = self.core.boot(word_source.as_deref());
        if changed {
            gloo::console::log!("word source: list changed, card reset");
            self.core.show_notice(WORDS_CHANGED_NOTICE);
            let core = self.core.clone();
            Timeout::new(NOTICE_DURATION_MS, move || core.clear_notice()).forget();
        }
        boot::ready();
    }
}

pub(crate) fn run() {
    let config = load_app_config();
    let core = AppCore::new(open_storage());
    yew_app::mount(core.clone(), config.clone());
    spawn_local(async move {
        BootCoordinator { core, config }.run().await;
    });
}
