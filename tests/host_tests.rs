//! Host integration tests: collaborator I/O around a full game.

use tessera::cards::{Card, CardId, Powers};
use tessera::collab::{
    CollaboratorError, DeckId, InMemoryCatalog, InMemoryStore, JsonCatalog, PersistenceSink, PlayerIdentity,
};
use tessera::core::{GameConfig, GameError, PlayerId};
use tessera::host::{GameHost, Seating};
use tessera::rules::GameStatus;

type Host = GameHost<InMemoryCatalog, InMemoryStore>;

fn admin() -> PlayerIdentity {
    PlayerIdentity::admin("admin", "Admin")
}

fn alice() -> PlayerIdentity {
    PlayerIdentity::player("alice", "Alice")
}

fn bob() -> PlayerIdentity {
    PlayerIdentity::player("bob", "Bob")
}

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_cards((1..=10).map(|id| {
        let p = (id % 10 + 1) as u8;
        Card::new(CardId::new(id), format!("card-{id}"), Powers::new(p, 11 - p, p, 11 - p))
    }))
}

fn host() -> Host {
    let _ = env_logger::builder().is_test(true).try_init();
    GameHost::new(catalog(), InMemoryStore::new(), GameConfig::default()).unwrap()
}

/// Grant `cards` to `who` and build a deck from them.
fn deck_for(host: &Host, who: &PlayerIdentity, cards: &[u32]) -> DeckId {
    let store = host.store();
    store.ensure_user(who, None).unwrap();
    let deck = store.create_deck(who, "").unwrap();
    for &id in cards {
        store.grant_cards(&admin(), &who.id, CardId::new(id), 1).unwrap();
        store.add_to_deck(who, deck.id, CardId::new(id), 1).unwrap();
    }
    deck.id
}

fn seated(host: &Host) -> [Seating; 2] {
    let a = deck_for(host, &alice(), &[1, 2, 3, 4, 5, 6]);
    let b = deck_for(host, &bob(), &[5, 6, 7, 8, 9, 10]);
    [Seating::new(alice(), a), Seating::new(bob(), b)]
}

#[test]
fn test_play_and_record_match() {
    let host = host();
    let mut session = host.start_game(seated(&host), 77).unwrap();
    assert_eq!(session.identity(PlayerId::ONE), &alice());
    assert_eq!(session.identity(PlayerId::TWO), &bob());

    while let Some(mv) = session.legal_moves().first().copied() {
        session.apply_move(mv).unwrap();
    }
    assert!(session.is_over());

    let id = host.finish_game(&bob(), &session).unwrap();
    let results = host.store().match_results(&alice()).unwrap();
    assert_eq!(results.len(), 1);

    let result = &results[0];
    assert_eq!(result.id, id);
    assert_eq!(result.status, session.status());
    assert_eq!(result.moves.len(), 9);
    assert_eq!(result.scores, *session.scores());
    assert_eq!(result.winner(), session.winner().map(|p| &session.identity(p).id));
}

#[test]
fn test_hands_come_from_own_decks() {
    let host = host();
    let session = host.start_game(seated(&host), 3).unwrap();
    for id in session.hand(PlayerId::ONE).card_ids() {
        assert!((1..=6).contains(&id.raw()));
    }
    for id in session.hand(PlayerId::TWO).card_ids() {
        assert!((5..=10).contains(&id.raw()));
    }
}

#[test]
fn test_cannot_bring_another_users_deck() {
    let host = host();
    let [alice_seat, _] = seated(&host);
    let stolen = Seating::new(bob(), alice_seat.deck);

    let err = host.start_game([alice_seat, stolen], 0).unwrap_err();
    assert!(matches!(err, GameError::Collaborator(CollaboratorError::Forbidden { .. })));
}

#[test]
fn test_short_deck_rejected() {
    let host = host();
    let a = deck_for(&host, &alice(), &[1, 2, 3]);
    let b = deck_for(&host, &bob(), &[5, 6, 7, 8, 9]);

    let err = host.start_game([Seating::new(alice(), a), Seating::new(bob(), b)], 0).unwrap_err();
    assert!(matches!(err, GameError::InvalidDeck { .. }));
}

#[test]
fn test_deck_card_missing_from_catalog() {
    let host = host();
    let a = deck_for(&host, &alice(), &[1, 2, 3, 4, 42]);
    let b = deck_for(&host, &bob(), &[5, 6, 7, 8, 9]);

    let err = host.start_game([Seating::new(alice(), a), Seating::new(bob(), b)], 0).unwrap_err();
    assert_eq!(err, GameError::NotFound { card: CardId::new(42) });
}

#[test]
fn test_unfinished_game_not_recorded() {
    let host = host();
    let mut session = host.start_game(seated(&host), 5).unwrap();
    let mv = session.legal_moves()[0];
    session.apply_move(mv).unwrap();

    assert_eq!(host.finish_game(&alice(), &session), Err(GameError::InProgress));
    assert!(host.store().match_results(&alice()).unwrap().is_empty());
}

#[test]
fn test_outsider_cannot_record_result() {
    let host = host();
    let mut session = host.start_game(seated(&host), 5).unwrap();
    session.concede(PlayerId::TWO).unwrap();

    let eve = PlayerIdentity::player("eve", "Eve");
    let err = host.finish_game(&eve, &session).unwrap_err();
    assert!(matches!(err, GameError::Collaborator(CollaboratorError::Forbidden { .. })));

    host.finish_game(&alice(), &session).unwrap();
    let results = host.store().match_results(&bob()).unwrap();
    assert_eq!(results[0].status, GameStatus::Player1Won);
}

#[test]
fn test_json_catalog_with_bad_power_rejected() {
    let json = r#"[
        { "id": 1, "name": "Giant", "powerTop": 11, "powerRight": 1, "powerBottom": 1, "powerLeft": 1 }
    ]"#;
    let provider = JsonCatalog::from_json(json).unwrap();
    let err = GameHost::new(provider, InMemoryStore::new(), GameConfig::default()).err().unwrap();
    assert!(matches!(err, GameError::InvalidCard { .. }));
}

#[test]
fn test_json_catalog_with_missing_power_surfaces_collaborator_error() {
    let json = r#"[{ "id": 3, "name": "Ghost", "powerTop": 2, "powerRight": null, "powerBottom": 2, "powerLeft": 2 }]"#;
    let err = JsonCatalog::from_json(json).unwrap_err();
    assert_eq!(err, CollaboratorError::Invalid("card 3 has no right power".to_string()));
}
