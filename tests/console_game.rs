//! Full games driven through the console front-end

mod common;

use std::{
    cell::RefCell,
    io::{self, Cursor, Write},
    rc::Rc,
};

use common::ScriptedInput;
use tictactoe_ai::{
    cli::{commands::play::describe_rejection, input::ConsoleInput, renderer::ConsoleRenderer},
    engine::TicTacToe,
    players::{MoveInput, Player},
    tictactoe::Mark,
};

/// Write target the test can read after the renderer has taken ownership
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

type Console = Rc<RefCell<ConsoleInput<Cursor<Vec<u8>>, SharedBuffer>>>;

fn console(keys: &str, screen: &SharedBuffer) -> Console {
    Rc::new(RefCell::new(ConsoleInput::new(
        Cursor::new(keys.as_bytes().to_vec()),
        screen.clone(),
    )))
}

fn human(mark: Mark, console: &Console) -> Player {
    Player::human(mark, Box::new(Rc::clone(console)) as Box<dyn MoveInput>)
}

#[test]
fn two_humans_share_one_console() {
    let screen = SharedBuffer::default();
    let keys = console("A1\nB2\nB2\nb1\n2a\nC1\nA3\n", &screen);
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&messages);

    let renderer = ConsoleRenderer::new(screen.clone()).without_clearing();
    let mut game = TicTacToe::new(
        human(Mark::Cross, &keys),
        human(Mark::Naught, &keys),
        Box::new(renderer),
    )
    .unwrap()
    .with_error_handler(move |err| sink.borrow_mut().push(describe_rejection(err)));

    let final_state = game.play(Mark::Cross).unwrap();
    assert_eq!(final_state.grid().to_string(), "XXXOO....");
    assert_eq!(final_state.winner(), Some(Mark::Cross));
    assert_eq!(*messages.borrow(), vec!["That cell is already occupied.".to_string()]);

    let transcript = screen.text();
    assert_eq!(transcript.matches("X's move: ").count(), 4);
    assert_eq!(transcript.matches("O's move: ").count(), 2);
    assert!(transcript.ends_with("X wins \u{1F389}\n"));
}

#[test]
fn unreadable_coordinates_stay_inside_the_console() {
    let screen = SharedBuffer::default();
    let keys = console("top left\nA1\n", &screen);
    let messages = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&messages);

    let mut game = TicTacToe::new(
        human(Mark::Cross, &keys),
        Player::human(Mark::Naught, Box::new(ScriptedInput::new(&[4, 3, 5]))),
        Box::new(ConsoleRenderer::new(screen.clone()).without_clearing()),
    )
    .unwrap()
    .with_error_handler(move |err| sink.borrow_mut().push(err.to_string()));

    // X runs out of keys after A1, so the game stops with no move available.
    let err = game.play(Mark::Cross).unwrap_err();
    assert!(matches!(
        err,
        tictactoe_ai::Error::NoMoveAvailable { mark: Mark::Cross }
    ));
    assert!(messages.borrow().is_empty());
    assert!(screen.text().contains("Please provide coordinates"));
}
