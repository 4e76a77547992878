//! 终端前端
//!
//! 命令解析，以及练习页选择之后的停留窗口：停留期间仍然读取输入，
//! 作答命令交给 `PracticeFlow::select_number`（有待处理选择时被忽略），
//! 其他命令推迟到进入下一题之后执行。

use tokio::io::{AsyncBufRead, Lines};

use crate::flows::{Destination, Notice, PracticeFlow, Selection};

// ============================================================
// Command - 终端命令
// ============================================================

/// 一行输入解析出的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(Destination),
    /// `go <n>`，序号无法解析时为 None
    Shortcut(Option<usize>),
    SetWord(String),
    SetMeaning(String),
    SetExample(String),
    Submit,
    Next,
    Previous,
    Learned,
    Favorite,
    /// `answer <n>`，序号无法解析时为 None
    Answer(Option<usize>),
    Restart,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// 解析一行输入；空行返回 None
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (name, rest) = match line.split_once(' ') {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        if let Some(destination) = Destination::ALL
            .iter()
            .copied()
            .find(|d| d.title().eq_ignore_ascii_case(name))
        {
            return Some(Self::Navigate(destination));
        }

        let command = match name {
            "go" => Self::Shortcut(rest.parse().ok()),
            "word" => Self::SetWord(rest.to_string()),
            "meaning" => Self::SetMeaning(rest.to_string()),
            "example" => Self::SetExample(rest.to_string()),
            "submit" => Self::Submit,
            "next" => Self::Next,
            "prev" => Self::Previous,
            "learned" => Self::Learned,
            "fav" => Self::Favorite,
            "answer" => Self::Answer(rest.parse().ok()),
            "restart" => Self::Restart,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}

// ============================================================
// 停留窗口
// ============================================================

/// 一次停留窗口的结果
#[derive(Debug, Default)]
pub struct Settled {
    /// `advance` 产生的提示
    pub notice: Option<Notice>,
    /// 停留期间被忽略的作答次数
    pub ignored_answers: usize,
    /// 停留期间输入的其他命令，按输入顺序
    pub deferred: Vec<Command>,
    /// 停留期间输入已结束
    pub input_closed: bool,
}

/// 等待 `settle_delay` 后进入下一题，同时继续读取输入
///
/// 计时结束前不会调用 `advance`，所以停留期间的作答落在已作答的题目上并被忽略，
/// 不会计到下一题。输入结束时仍等满停留时间。
pub async fn settle_practice<R>(practice: &mut PracticeFlow, lines: &mut Lines<R>) -> Settled
where
    R: AsyncBufRead + Unpin,
{
    let mut settled = Settled::default();
    let sleep = tokio::time::sleep(practice.settle_delay());
    tokio::pin!(sleep);

    while !settled.input_closed {
        tokio::select! {
            _ = &mut sleep => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => match Command::parse(&line) {
                    Some(Command::Answer(Some(number))) => {
                        if practice.select_number(number) == Selection::Ignored {
                            settled.ignored_answers += 1;
                        }
                    }
                    Some(command) => settled.deferred.push(command),
                    None => {}
                },
                Ok(None) => settled.input_closed = true,
                Err(err) => {
                    tracing::warn!(error = %err, "reading input during settle delay failed");
                    settled.input_closed = true;
                }
            },
        }
    }

    if !sleep.is_elapsed() {
        sleep.await;
    }

    settled.notice = practice.advance();
    settled
}
