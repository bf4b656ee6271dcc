use std::io;

use crossterm::event::{Event, KeyEvent};
use tokio::sync::mpsc;

/// Forwards key events until the terminal reports an error or the receiver is dropped.
pub fn forward_keys<P, R>(mut poll: P, mut read: R, sender: &mpsc::Sender<KeyEvent>)
where
	P: FnMut() -> io::Result<bool>,
	R: FnMut() -> io::Result<Event>,
{
	while !sender.is_closed() {
		match poll() {
			Ok(true) => {},
			Ok(false) => continue,
			Err(_) => break,
		}

		match read() {
			Ok(Event::Key(key)) =>
				if sender.blocking_send(key).is_err() {
					break;
				},
			Ok(_) => {},
			Err(_) => break,
		}
	}
}
