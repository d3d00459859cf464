//! Interactive two-stage turnaround timer.
//!
//! First Review counts down half the audio length, Speaker Verification one
//! and a half times it. Finishing First Review saves an In Progress entry;
//! finishing Speaker Verification marks it Completed. Commands are read line
//! by line from stdin while the ticker runs:
//!
//! - `p` pause or resume
//! - `f` finish the current stage
//! - `q` quit without finishing

use super::add::select_client;
use super::open_book;
use crate::{
    db::entries::Entries,
    libs::{
        book::EntryBook,
        clock::{Clock, SystemClock},
        config::Config,
        messages::Message,
        ticker::{TickUpdate, Ticker},
        timer::{parse_audio_duration, FirstReviewDraft, Stage, TimerEvent, TimerSession},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Debug, Args, Default)]
pub struct TimerArgs {
    /// Audio length (HH:MM:SS)
    #[arg(short, long)]
    audio: Option<String>,
    /// File name for the saved entry
    #[arg(short, long)]
    name: Option<String>,
    #[arg(short, long)]
    client: Option<String>,
    #[arg(short, long)]
    link: Option<String>,
}

pub async fn cmd(args: TimerArgs) -> Result<()> {
    let (config, mut book) = open_book()?;
    run(&config, &mut book, args).await?;
    Ok(())
}

/// Runs one timer session. Returns `true` when both stages were finished.
pub async fn run(config: &Config, book: &mut EntryBook<Entries>, args: TimerArgs) -> Result<bool> {
    let theme = ColorfulTheme::default();
    msg_print!(Message::TimerHeader, true);

    let audio = match args.audio {
        Some(audio) => {
            parse_audio_duration(&audio)?;
            audio
        }
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptAudioDuration.to_string())
            .validate_with(|input: &String| parse_audio_duration(input).map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?,
    };
    let file_name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptTimerFileName.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let client = match args.client {
        Some(client) => client,
        None => select_client(&theme, &config.clients, "")?,
    };

    let session = Arc::new(Mutex::new(TimerSession::new(config.auto_start)));
    {
        let mut session = session.lock();
        session.set_audio_duration(&audio)?;
        if !session.is_running() {
            session.start()?;
        }
    }
    msg_info!(Message::TimerStarted(Stage::FirstReview.to_string()));
    msg_print!(Message::TimerControls);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = Ticker::spawn(Arc::clone(&session), tx);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut completed = false;

    loop {
        tokio::select! {
            Some(update) = rx.recv() => {
                match update {
                    TickUpdate::Tick(_) => redraw(&session.lock()),
                    TickUpdate::Timer(TimerEvent::Expired(stage)) => {
                        println!();
                        msg_warning!(Message::TimerExpired(stage.to_string()));
                    }
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "p" => {
                        let mut session = session.lock();
                        let was_running = session.is_running();
                        match session.toggle() {
                            Ok(()) if was_running => msg_info!(Message::TimerPaused),
                            Ok(()) => msg_info!(Message::TimerResumed),
                            Err(e) => msg_error!(e),
                        }
                    }
                    "f" => {
                        let stage = session.lock().stage();
                        match stage {
                            Stage::FirstReview => {
                                let draft = FirstReviewDraft {
                                    owner_id: book.owner_id().to_string(),
                                    file_name: Some(file_name.clone()),
                                    client: client.clone(),
                                    date: SystemClock.today(),
                                    created_at: SystemClock.now(),
                                    link: args.link.clone(),
                                };
                                let result = {
                                    let mut session = session.lock();
                                    let result = session.finish_first_review(book.store_mut(), draft);
                                    if result.is_ok() && !session.is_running() {
                                        session.start()?;
                                    }
                                    result
                                };
                                match result {
                                    Ok(id) => {
                                        msg_success!(Message::TimerFirstReviewSaved(id));
                                        msg_info!(Message::TimerStarted(Stage::SpeakerVerification.to_string()));
                                    }
                                    Err(e) => msg_error!(Message::EntrySaveFailed(e.to_string())),
                                }
                                book.refresh()?;
                            }
                            Stage::SpeakerVerification => {
                                let linked = session.lock().linked_entry_id();
                                let result = session.lock().finish_speaker_verification(book.store_mut());
                                book.refresh()?;
                                match result {
                                    Ok(()) => {
                                        if let Some(id) = linked {
                                            msg_success!(Message::TimerCompleted(id));
                                        }
                                        completed = true;
                                        break;
                                    }
                                    Err(e) => msg_error!(Message::EntrySaveFailed(e.to_string())),
                                }
                            }
                        }
                    }
                    "q" => {
                        msg_info!(Message::TimerAborted);
                        break;
                    }
                    "" => redraw(&session.lock()),
                    other => msg_warning!(Message::TimerUnknownCommand(other.to_string())),
                }
            }
        }
    }

    ticker.stop().await;
    Ok(completed)
}

fn redraw(session: &TimerSession) {
    print!("\r{}   ", View::timer_line(session));
    let _ = std::io::stdout().flush();
}
