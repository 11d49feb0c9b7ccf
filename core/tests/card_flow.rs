use cartela_core::{
    resolve_tab, Card, ConfigCell, Marks, MemoryStore, PlayCell, Tab, FREE_CELL, SLOT_COUNT,
};

fn word_source(count: usize) -> String {
    let words: Vec<String> = (0..count).map(|i| format!("{}", (b'A' + i as u8) as char)).collect();
    serde_json::to_string(&words).unwrap()
}

fn fill(card: &mut Card, storage: &MemoryStore, cells: impl Iterator<Item = usize>) {
    for cell in cells {
        let word = match card.config_view().cell(cell) {
            Some(ConfigCell::Choice { options, .. }) => options[0].clone(),
            other => panic!("cell {cell} not choosable: {other:?}"),
        };
        card.choose(storage, cell, &word).unwrap();
    }
}

#[test]
fn chosen_word_is_hidden_from_other_slots_until_cleared() {
    let storage = MemoryStore::new();
    let mut card = Card::boot(&storage, Some(&word_source(26))).card;
    card.choose(&storage, 0, "C").unwrap();

    let options_for = |card: &Card, cell: usize| match card.config_view().cell(cell) {
        Some(ConfigCell::Choice { options, .. }) => options.clone(),
        other => panic!("unexpected cell {other:?}"),
    };
    assert!(!options_for(&card, 1).contains(&"C".to_string()));
    assert!(matches!(
        card.config_view().cell(0),
        Some(ConfigCell::Filled { slot: 0, word }) if word == "C"
    ));

    card.clear(&storage, 0).unwrap();
    assert!(options_for(&card, 1).contains(&"C".to_string()));
    assert!(options_for(&card, 0).contains(&"C".to_string()));
}

#[test]
fn free_cell_cannot_be_chosen() {
    let storage = MemoryStore::new();
    let mut card = Card::boot(&storage, Some(&word_source(24))).card;
    assert!(card.choose(&storage, FREE_CELL, "A").is_err());
    assert_eq!(card.config_view().cell(FREE_CELL), Some(&ConfigCell::Free));
}

#[test]
fn play_unlocks_only_on_a_full_card() {
    let storage = MemoryStore::new();
    let mut card = Card::boot(&storage, Some(&word_source(26))).card;
    assert!(!card.words_changed());

    let cells: Vec<usize> = (0..25).filter(|cell| *cell != FREE_CELL).collect();
    fill(&mut card, &storage, cells[..23].iter().copied());
    let status = card.status();
    assert!(!status.play_enabled());
    assert_eq!(status.message(), "Células preenchidas: 23 / 24");
    assert_eq!(resolve_tab(Tab::Play, &status), Tab::Config);

    fill(&mut card, &storage, cells[23..].iter().copied());
    let status = card.status();
    assert!(status.play_enabled());
    assert_eq!(status.message(), "Células preenchidas: 24 / 24");
    assert_eq!(resolve_tab(Tab::Play, &status), Tab::Play);

    let play = card.play_view();
    assert_eq!(play.cell(FREE_CELL), Some(&PlayCell::Free));
    let words: Vec<&str> = play
        .cells
        .iter()
        .filter_map(|cell| match cell {
            PlayCell::Word { word, .. } => Some(word.as_str()),
            PlayCell::Free => None,
        })
        .collect();
    assert_eq!(words.len(), SLOT_COUNT);
    assert!(words.iter().all(|word| !word.is_empty()));
}

#[test]
fn selections_survive_a_reload() {
    let storage = MemoryStore::new();
    let source = word_source(24);
    let mut card = Card::boot(&storage, Some(&source)).card;
    card.choose(&storage, 13, "B").unwrap();

    let reloaded = Card::boot(&storage, Some(&source));
    assert!(reloaded.issues.is_empty());
    assert_eq!(reloaded.card.selections().get(12), "B");
    assert!(!reloaded.card.words_changed());
}

#[test]
fn new_word_list_clears_the_saved_card() {
    let storage = MemoryStore::new();
    let mut card = Card::boot(&storage, Some(&word_source(24))).card;
    card.choose(&storage, 0, "A").unwrap();

    let reloaded = Card::boot(&storage, Some(&word_source(25))).card;
    assert!(reloaded.words_changed());
    assert_eq!(reloaded.selections().filled_count(), 0);
}

#[test]
fn marks_toggle_but_center_stays_marked() {
    let mut marks = Marks::new();
    assert!(marks.is_marked(FREE_CELL));
    assert!(marks.toggle(0));
    assert!(!marks.toggle(0));
    assert!(marks.toggle(FREE_CELL));
    assert!(marks.is_marked(FREE_CELL));
    assert_eq!(marks.marked_count(), 1);
}
