//! Shutdown triggers
//!
//! The server stops gracefully on Ctrl-C, SIGTERM (unix) or, when the
//! console watcher is enabled, on an operator typing `0`.

use std::io::{self, BufRead, Write};
use std::thread;

use tokio::signal;
use tokio::sync::oneshot;

use crate::calculator::Language;

/// Prompt printed by the console watcher
pub fn console_prompt(language: Language) -> &'static str {
    match language {
        Language::En => "Press 0 to stop the server.",
        Language::Pt => "Pressione 0 para encerrar a aplicação.",
    }
}

/// Line printed once the stop command is read
pub fn console_stop_message(language: Language) -> &'static str {
    match language {
        Language::En => "Stopping the server...",
        Language::Pt => "Encerrando a aplicação...",
    }
}

/// Read operator input until a line equal to `0` (after trimming) or EOF
///
/// Returns true when the stop command was read.
pub fn watch_console<R: BufRead, W: Write>(input: R, mut output: W, language: Language) -> bool {
    let prompt = console_prompt(language);
    let _ = writeln!(output, "{}", prompt);
    let _ = output.flush();

    for line in input.lines() {
        let Ok(line) = line else {
            return false;
        };
        if line.trim() == "0" {
            let _ = writeln!(output, "{}", console_stop_message(language));
            let _ = output.flush();
            return true;
        }
        let _ = writeln!(output, "{}", prompt);
        let _ = output.flush();
    }

    false
}

/// Watch stdin on a dedicated thread
///
/// The receiver completes when `0` is typed. On EOF, or if the thread cannot
/// be spawned, the sender is dropped and the receiver reports closure.
pub fn spawn_console_watcher(language: Language) -> oneshot::Receiver<()> {
    let (tx, rx) = oneshot::channel();

    let spawned = thread::Builder::new()
        .name("console-watcher".to_string())
        .spawn(move || {
            if watch_console(io::stdin().lock(), io::stdout(), language) {
                let _ = tx.send(());
            } else {
                tracing::debug!("stdin closed, console shutdown disabled");
            }
        });

    if let Err(e) = spawned {
        tracing::warn!(error = %e, "Failed to start console watcher");
    }

    rx
}

/// Wait until any shutdown trigger fires
pub async fn wait_for_shutdown(console: Option<oneshot::Receiver<()>>) {
    tokio::select! {
        () = wait_ctrl_c() => {},
        () = wait_sigterm() => {},
        () = wait_console(console) => {},
    }
}

async fn wait_ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C signal"),
        Err(e) => {
            tracing::error!(error = %e, "Error handling Ctrl+C signal");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(unix)]
async fn wait_sigterm() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut handler) => {
            handler.recv().await;
            tracing::info!("Received SIGTERM signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_sigterm() {
    std::future::pending::<()>().await;
}

async fn wait_console(console: Option<oneshot::Receiver<()>>) {
    if let Some(rx) = console {
        if rx.await.is_ok() {
            tracing::info!("Received console stop command");
            return;
        }
    }
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    #[test]
    fn test_watch_console_stops_on_zero() {
        let mut output = Vec::new();
        let stopped = watch_console(
            Cursor::new("1\nhello\n 0 \nignored\n"),
            &mut output,
            Language::En,
        );
        assert!(stopped);

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Press 0 to stop the server.").count(), 3);
        assert!(printed.ends_with("Stopping the server...\n"));
    }

    #[test]
    fn test_watch_console_portuguese() {
        let mut output = Vec::new();
        assert!(watch_console(Cursor::new("x\n0\n"), &mut output, Language::Pt));

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(
            printed,
            "Pressione 0 para encerrar a aplicação.\n\
             Pressione 0 para encerrar a aplicação.\n\
             Encerrando a aplicação...\n"
        );
    }

    #[test]
    fn test_watch_console_eof() {
        let mut output = Vec::new();
        assert!(!watch_console(Cursor::new("1\n00\n"), &mut output, Language::En));

        let printed = String::from_utf8(output).unwrap();
        assert!(!printed.contains(console_stop_message(Language::En)));
    }

    #[tokio::test]
    async fn test_console_trigger_completes_wait() {
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(1), wait_for_shutdown(Some(rx)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_closed_console_does_not_trigger() {
        let (tx, rx) = oneshot::channel::<()>();
        drop(tx);
        let waited =
            tokio::time::timeout(Duration::from_millis(50), wait_for_shutdown(Some(rx))).await;
        assert!(waited.is_err());
    }
}
