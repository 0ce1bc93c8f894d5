mod common;

use burnpile::{
    GameBuilder, GameError, GameEvent, GameOutcome, InvalidAction, ScriptedInteraction,
    TerminalInteraction,
};
use common::{c, init_logging, stacked_deck};

#[test]
fn scripted_game_runs_to_a_loser() -> Result<(), GameError> {
    init_logging();
    let deck = stacked_deck(&[&["3C", "5C", "8C"], &["4S", "6S", "9S"]], &[], false);
    let mut game = GameBuilder::new(2)?.with_deck(deck).build()?;
    let mut io = ScriptedInteraction::new(["0", "0", "0", "0", "0"]);
    let outcome = game.run(&mut io)?;

    assert_eq!(
        outcome,
        GameOutcome::Finished {
            finishing_order: vec![0],
            loser: Some(1)
        }
    );
    let events = io.events();
    assert_eq!(
        events.first(),
        Some(&GameEvent::GameStarted {
            players: vec![0, 1],
            starting_player: 0
        })
    );
    assert_eq!(events.last(), Some(&GameEvent::GameEnded(outcome)));
    assert_eq!(io.prompts(), 5);
    Ok(())
}

#[test]
fn unrecognized_input_is_reported_and_asked_again() -> Result<(), GameError> {
    init_logging();
    let deck = stacked_deck(&[&["3C", "KC", "4C"], &["5S", "6S", "8S"]], &[], true);
    let mut game = GameBuilder::new(2)?.with_deck(deck).build()?;
    let mut io = ScriptedInteraction::new(["shuffle", "9", "1"]);

    game.step(&mut io)?;
    assert_eq!(
        io.events().last(),
        Some(&GameEvent::Rejected {
            player: 0,
            reason: InvalidAction::InvalidInput(String::from("shuffle"))
        })
    );
    assert_eq!(game.current_player(), Some(0));

    game.step(&mut io)?;
    assert!(matches!(
        io.events().last(),
        Some(GameEvent::Rejected {
            reason: InvalidAction::IndexOutOfRange { index: 9, .. },
            ..
        })
    ));
    assert_eq!(game.current_player(), Some(0));

    game.step(&mut io)?;
    assert_eq!(game.pile().top_card(), Some(c("KC")));
    assert_eq!(game.current_player(), Some(1));
    Ok(())
}

#[test]
fn illegal_play_is_reported_with_the_card() -> Result<(), GameError> {
    let deck = stacked_deck(&[&["3C", "KC", "4C"], &["5S", "6S", "8S"]], &[], true);
    let mut game = GameBuilder::new(2)?.with_deck(deck).build()?;
    let mut io = ScriptedInteraction::new(["1", "0"]);
    game.step(&mut io)?;
    game.step(&mut io)?;
    assert!(io.events().contains(&GameEvent::Rejected {
        player: 1,
        reason: InvalidAction::IllegalPlay {
            card: c("5S"),
            top: c("KC")
        }
    }));
    assert_eq!(game.current_player(), Some(1));
    Ok(())
}

#[test]
fn drawn_card_confirmation_goes_through_the_collaborator() -> Result<(), GameError> {
    let deck = stacked_deck(
        &[&["3C", "KC", "4C"], &["5S", "6S", "8S"]],
        &["9H", "AD"],
        true,
    );
    let mut game = GameBuilder::new(2)?.with_deck(deck).build()?;
    let mut io = ScriptedInteraction::new(["1", "draw", "3"]).with_confirmations([true]);
    for _ in 0..4 {
        game.step(&mut io)?;
    }
    assert!(io.events().contains(&GameEvent::DrawnCardAccepted {
        player: 1,
        card: c("AD")
    }));
    assert_eq!(game.pile().top_card(), Some(c("AD")));
    assert_eq!(game.current_player(), Some(0));
    assert_eq!(io.remaining_actions(), 0);
    Ok(())
}

#[test]
fn exhausted_script_cancels_the_game() -> Result<(), GameError> {
    let mut game = GameBuilder::new(3)?.with_seed(11).build()?;
    let starter = game.current_player().expect("starter");
    let mut io = ScriptedInteraction::new(Vec::<String>::new());
    let outcome = game.run(&mut io)?;
    assert_eq!(outcome, GameOutcome::Cancelled { by: starter });
    assert!(matches!(game.step(&mut io), Err(GameError::Cancelled)));
    Ok(())
}

#[test]
fn empty_deck_draw_reprompts_the_same_player() -> Result<(), GameError> {
    let deck = stacked_deck(&[&["3C", "KC", "4C"], &["5S", "6S", "8S"]], &[], false);
    let mut game = GameBuilder::new(2)?.with_deck(deck).build()?;
    let mut io = ScriptedInteraction::new(["draw", "draw", "pickup"]);
    game.step(&mut io)?;
    game.step(&mut io)?;
    assert_eq!(game.current_player(), Some(0));
    assert_eq!(io.prompts(), 2);
    game.step(&mut io)?;
    assert_eq!(game.current_player(), Some(1));
    Ok(())
}

#[test]
fn terminal_session_narrates_and_quits_on_end_of_input() -> Result<(), GameError> {
    let deck = stacked_deck(&[&["3C", "KC", "4C"], &["5S", "6S", "8S"]], &[], true);
    let mut game = GameBuilder::new(2)?.with_deck(deck).build()?;
    let input = std::io::Cursor::new(b"1\nbogus\npickup\n".to_vec());
    let mut io = TerminalInteraction::new(input, Vec::new());
    let outcome = game.run(&mut io)?;
    assert_eq!(outcome, GameOutcome::Cancelled { by: 0 });

    let text = String::from_utf8(io.into_output()).expect("utf8 output");
    assert!(text.contains("Player 0 holds the lowest card and starts."));
    assert!(text.contains("Player 0 played K of Clubs"));
    assert!(text.contains("Invalid move: unrecognized input 'bogus'."));
    assert!(text.contains("Player 1 picked up the pile (1 cards)."));
    assert!(text.contains("Player 0 cancelled the game."));
    Ok(())
}
