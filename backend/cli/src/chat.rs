//! Terminal chat front end.
//!
//! Thin presentation layer over the chat session: four action commands, a
//! status command, and free-form input. All pipeline behavior (gating,
//! folding, sanitizing) lives in `aria-agent`.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use aria_agent::ChatSession;
use aria_companion::{ActionKind, CompanionMode};

use crate::http_relay::HttpRelay;

pub async fn run_chat(url: &str) -> Result<()> {
    let relay = Arc::new(HttpRelay::new(url));
    let mut session = ChatSession::new(relay);

    println!("{}", session.store().snapshot().status);
    println!("Commands: /feed /perform /comfort /rest /status /quit");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        prompt(&session)?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim().to_string();
        match line.as_str() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/status" => print_status(&session),
            "/feed" => run_action(&mut session, ActionKind::Feed).await,
            "/perform" => run_action(&mut session, ActionKind::Perform).await,
            "/comfort" => run_action(&mut session, ActionKind::Comfort).await,
            "/rest" => run_action(&mut session, ActionKind::Rest).await,
            _ => submit(&mut session, &line).await,
        }
    }
    println!("bye!");
    Ok(())
}

fn prompt(session: &ChatSession) -> Result<()> {
    let snapshot = session.store().snapshot();
    if snapshot.mode == CompanionMode::Resting {
        print!("(napping) > ");
    } else {
        print!("> ");
    }
    std::io::stdout().flush()?;
    Ok(())
}

async fn run_action(session: &mut ChatSession, kind: ActionKind) {
    match session.perform_action(kind).await {
        Ok(true) => {
            println!("{}", session.store().snapshot().status);
            print_reply(session);
        }
        Ok(false) => {}
        Err(err) => {
            eprintln!("[error] {err}");
            print_reply(session);
        }
    }
}

async fn submit(session: &mut ChatSession, text: &str) {
    match session.submit(text).await {
        Ok(true) => print_reply(session),
        Ok(false) => {
            if session.store().snapshot().mode == CompanionMode::Resting {
                println!("Aria is napping... shh. (/feed, /perform or /comfort wakes her)");
            }
        }
        Err(err) => {
            // Whatever partial text was folded stands as the final reply.
            eprintln!("[error] {err}");
            print_reply(session);
        }
    }
}

fn print_reply(session: &ChatSession) {
    if let Some(reply) = session.last_reply() {
        if reply.is_empty() {
            println!("Aria: ...");
        } else {
            println!("Aria: {reply}");
        }
    }
}

fn print_status(session: &ChatSession) {
    let snapshot = session.store().snapshot();
    let state = snapshot.state;
    println!(
        "hunger {} | happiness {} | energy {} | mood {}{}",
        state.hunger,
        state.happiness,
        state.energy,
        state.mood().as_str(),
        if snapshot.mode == CompanionMode::Resting {
            " (napping)"
        } else {
            ""
        },
    );
}
