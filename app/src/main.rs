mod command;
mod screen;

use anyhow::Result;
use command::Command;
use pdf_qa::{Action, ClientConfig, Controller, FsDocumentPicker};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logging first; ClientConfig::from_env loads .env
    env_logger::init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        eprintln!("PDF uploader stopped: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: ClientConfig) -> Result<()> {
    let (mut controller, mut completions) =
        Controller::new(&config, Box::new(FsDocumentPicker::new()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    log::info!("Upload endpoint: {}", config.upload_url);
    log::info!("Ask endpoint: {}", config.ask_url);

    println!("{}", screen::HELP);
    println!("{}", screen::render(controller.session()));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let actions = match command::parse(&line) {
                    Command::Quit => break,
                    Command::Empty => continue,
                    Command::Help | Command::Unknown(_) => {
                        println!("{}", screen::HELP);
                        continue;
                    }
                    Command::Select(path) => vec![Action::Select(path)],
                    Command::Question(text) => vec![Action::EditQuestion(text)],
                    Command::Upload => {
                        if !controller.session().can_upload() {
                            println!("Upload PDF is disabled until a file is selected.");
                            continue;
                        }
                        vec![Action::Upload]
                    }
                    Command::Ask(text) => {
                        if !controller.session().can_ask() {
                            println!("Ask is disabled until a PDF is uploaded.");
                            continue;
                        }
                        match text {
                            Some(text) => vec![Action::EditQuestion(text), Action::Ask],
                            None => vec![Action::Ask],
                        }
                    }
                    Command::Reset => vec![Action::Reset],
                };

                for action in actions {
                    if let Some(notification) = controller.dispatch(action) {
                        println!("{}", screen::notification(&notification));
                    }
                }
                println!("{}", screen::render(controller.session()));
            }
            Some(completion) = completions.recv() => {
                if let Some(notification) = controller.complete(completion) {
                    println!("{}", screen::notification(&notification));
                }
                println!("{}", screen::render(controller.session()));
            }
        }
    }

    Ok(())
}
