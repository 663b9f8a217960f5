/*
 * Copyright (c) 2025 The flickr_shuffle Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr_shuffle;

use anyhow::Result;
use dotenvy::dotenv;
use flickr_shuffle::flickr::PreloadedPhoto;
use flickr_shuffle::viewer::{
    Attribution, ClipboardError, ControlMode, CopyControl, DisplaySurface, Key, KeyEvent,
    Sequencer, Theme, TransitionDone, ViewerConfig, transition,
};
use std::io::BufRead;
use std::time::Duration;
use tokio::sync::mpsc;

// Prints what a web page would show
struct TerminalSurface;

impl DisplaySurface for TerminalSurface {
    type Slot = String;

    fn set_control(&self, mode: ControlMode) {
        println!("[load next: {}]", mode);
    }

    fn mount(&self, photo: &PreloadedPhoto, attribution: &Attribution) -> String {
        let (width, height) = photo.image.dimensions();
        println!("\n{}", photo.metadata.title);
        println!("{} {} <{}>", attribution.label, attribution.author, attribution.page_url);
        println!("Download: {} ({}x{})", attribution.download_url, width, height);
        photo.metadata.id.clone()
    }

    fn fade_out(&self, slot: &String) -> TransitionDone {
        println!("(fading out {})", slot);
        let (notifier, done) = transition();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            notifier.complete();
        });
        done
    }

    fn detach(&self, _slot: String) {}

    fn show_config_error(&self, title: &str, detail: &str) {
        eprintln!("{}\n{}", title, detail);
    }

    fn set_copy_control(&self, control: CopyControl) {
        println!("[{}]", control.label);
    }

    fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        // No clipboard in a plain terminal, the link is printed instead
        println!("Link: {}", text);
        Ok(())
    }

    fn apply_theme(&self, theme: Theme) {
        println!("[theme: {} {}]", theme, theme.toggle_icon());
    }
}

// Commands typed on stdin, one per line
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let sequencer = Sequencer::launch_from_env(TerminalSurface, ViewerConfig::preloading())?;
    println!("Enter/space: next photo, c: copy link, d: dark mode, q: quit");

    let first = sequencer.clone();
    tokio::spawn(async move { first.start().await });

    let mut commands = spawn_stdin_reader();
    while let Some(command) = commands.recv().await {
        match command.trim_end_matches(['\r', '\n']) {
            "q" => break,
            "c" => {
                if let Err(err) = sequencer.copy_link() {
                    println!("{}", err);
                }
            }
            "d" => {
                sequencer.toggle_theme();
            }
            line => {
                let key = if line == " " { Key::Space } else { Key::Enter };
                let next = sequencer.clone();
                tokio::spawn(async move { next.handle_key(&KeyEvent::on_page(key)).await });
            }
        }
    }

    sequencer.shutdown();
    Ok(())
}
