use crate::grid::SLOT_COUNT;
use crate::selection::Selections;

pub const WORDS_CHANGED_NOTICE: &str = "Lista de palavras atualizada — cartela reiniciada";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Config,
    Play,
}

impl Tab {
    pub fn id(self) -> &'static str {
        match self {
            Tab::Config => "config",
            Tab::Play => "play",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Config => "Configuração",
            Tab::Play => "Jogar",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStatus {
    pub filled: usize,
    pub total: usize,
}

impl CardStatus {
    pub fn from_selections(selections: &Selections) -> Self {
        Self {
            filled: selections.filled_count(),
            total: SLOT_COUNT,
        }
    }

    pub fn message(&self) -> String {
        format!("Células preenchidas: {} / {}", self.filled, self.total)
    }

    /// The play tab and the export action only exist on a full card.
    pub fn play_enabled(&self) -> bool {
        self.filled == self.total
    }
}

pub fn resolve_tab(requested: Tab, status: &CardStatus) -> Tab {
    match requested {
        Tab::Play if !status.play_enabled() => Tab::Config,
        tab => tab,
    }
}
