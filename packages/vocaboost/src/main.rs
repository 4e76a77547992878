use std::collections::VecDeque;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use vocaboost::app::VocabApp;
use vocaboost::config::Config;
use vocaboost::flows::home::{self, HOME_ACTIONS};
use vocaboost::flows::{AddOutcome, Destination, LearnState, OptionMark, PracticeState, Selection};
use vocaboost::logging;
use vocaboost::remote::HttpWordService;
use vocaboost::terminal::{self, Command};

const HELP: &str = "\
commands:
  home | learn | add | practice | profile   switch screen
  go <n>                                    home shortcut (1-4)
  word <text> | meaning <text> | example <text>
  submit                                    add the word
  next | prev | learned | fav               flashcards
  answer <n> | restart                      practice
  help | quit";

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = logging::init_tracing(&config.log_level, config.file_log_dir.as_deref());
    config.log_startup();

    let store = match vocaboost::open_store(&config) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, "failed to open local store");
            std::process::exit(1);
        }
    };

    let service = match HttpWordService::new(config.api_base_url.clone()) {
        Ok(service) => service,
        Err(err) => {
            tracing::error!(error = %err, "failed to create word service client");
            std::process::exit(1);
        }
    };

    match service.ping().await {
        Ok(status) => tracing::info!(base_url = %service.base_url(), %status, "word service reachable"),
        Err(err) => tracing::warn!(base_url = %service.base_url(), error = %err, "word service not reachable"),
    }

    let mut app = VocabApp::new(Arc::new(service), store, config.settle_delay);
    render(&app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    // 练习停留期间输入、推迟执行的命令
    let mut pending: VecDeque<Command> = VecDeque::new();
    let mut input_closed = false;

    loop {
        let command = match pending.pop_front() {
            Some(command) => command,
            None if input_closed => break,
            None => match lines.next_line().await {
                Ok(Some(line)) => match Command::parse(&line) {
                    Some(command) => command,
                    None => continue,
                },
                Ok(None) => break,
                Err(err) => {
                    tracing::error!(error = %err, "reading stdin failed");
                    break;
                }
            },
        };

        let notice = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Unknown(_) => {
                println!("unknown command, try `help`");
                continue;
            }
            Command::Navigate(destination) => app.navigate(destination).await,
            Command::Shortcut(number) => match number.and_then(home::action) {
                Some(action) => app.navigate(action.destination).await,
                None => {
                    println!("unknown shortcut");
                    None
                }
            },
            Command::SetWord(text) => {
                app.add.set_word(text);
                None
            }
            Command::SetMeaning(text) => {
                app.add.set_meaning(text);
                None
            }
            Command::SetExample(text) => {
                app.add.set_example(text);
                None
            }
            Command::Submit => {
                let (outcome, follow_up) = app.submit_word().await;
                match outcome {
                    AddOutcome::Rejected(notice) | AddOutcome::Failed(notice) => Some(notice),
                    AddOutcome::Added { notice, .. } => {
                        println!("{notice}");
                        follow_up
                    }
                }
            }
            Command::Next => {
                app.learn.next();
                None
            }
            Command::Previous => {
                app.learn.previous();
                None
            }
            Command::Learned => app.learn.mark_learned(),
            Command::Favorite => app.learn.favorite(),
            Command::Answer(None) => {
                println!("usage: answer <n>");
                continue;
            }
            Command::Answer(Some(number)) => match app.practice.select_number(number) {
                Selection::Accepted { correct } => {
                    println!("{}", if correct { "correct" } else { "wrong" });
                    render_question(&app);

                    let settled = terminal::settle_practice(&mut app.practice, &mut lines).await;
                    if settled.ignored_answers > 0 {
                        println!("Already answered, moving on.");
                    }
                    pending.extend(settled.deferred);
                    input_closed |= settled.input_closed;
                    settled.notice
                }
                Selection::Ignored => None,
            },
            Command::Restart => {
                if !app.practice.restart() {
                    println!("Finish the practice before restarting.");
                }
                None
            }
        };

        if let Some(notice) = notice {
            println!("{notice}");
        }
        render(&app);
    }
}

fn render(app: &VocabApp) {
    println!("\n== {} ==", app.current());
    match app.current() {
        Destination::Home => {
            println!("Welcome to VocaBoost!");
            for (i, action) in HOME_ACTIONS.iter().enumerate() {
                println!("  {}. {}", i + 1, action.label);
            }
        }
        Destination::Add => {
            let form = app.add.form();
            println!("word:    {}", form.word);
            println!("meaning: {}", form.meaning);
            println!("example: {}", form.example);
        }
        Destination::Learn => match (app.learn.state(), app.learn.current_word()) {
            (LearnState::Loading, _) => println!("Loading..."),
            (LearnState::Ready { index }, Some(word)) => {
                println!("[{}/{}] {}", index + 1, app.learn.words().len(), word.word);
                println!("  {}", word.meaning);
                println!("  Example: {}", word.example);
            }
            _ => println!("No words found."),
        },
        Destination::Practice => match app.practice.state() {
            PracticeState::Loading => println!("Loading..."),
            PracticeState::Empty => println!("Add at least 4 words to practice."),
            PracticeState::InProgress { .. } => render_question(app),
            PracticeState::Completed { score, total } => {
                println!("Practice Completed! Your Score: {score} / {total}");
                println!("(restart to try again)");
            }
        },
        Destination::Profile => {
            let summary = app.profile.summary();
            println!("Total Words Learned: {}", summary.total_words);
            println!("Practice Attempts:   {}", summary.practice_count);
            println!("Correct Answers:     {}", summary.correct_answers);
            println!("Accuracy:            {}%", summary.accuracy);
        }
    }
}

fn render_question(app: &VocabApp) {
    let (Some(question), PracticeState::InProgress { score, .. }) =
        (app.practice.current_question(), app.practice.state())
    else {
        return;
    };

    println!("{}", question.word);
    for (i, (option, mark)) in app.practice.option_marks().into_iter().enumerate() {
        let symbol = match mark {
            OptionMark::Correct => "[ok] ",
            OptionMark::Wrong => "[x] ",
            OptionMark::Neutral => "",
        };
        println!("  {}. {}{}", i + 1, symbol, option);
    }
    println!("Score: {} / {}", score, app.practice.questions().len());
}
