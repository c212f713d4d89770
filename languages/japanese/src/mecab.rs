use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use shredder_core::language::{Tagger, TaggerError};
use shredder_types::TaggedToken;

const END_OF_SENTENCE: &str = "EOS";

/// Long-lived MeCab process fed one sentence at a time
pub struct MecabTagger {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl MecabTagger {
    /// Start `command`, optionally pointing it at a dictionary directory
    pub fn spawn(command: &str, dicdir: Option<&Path>) -> Result<Self, TaggerError> {
        let mut cmd = Command::new(command);
        if let Some(dir) = dicdir {
            cmd.arg("-d").arg(dir);
        }

        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| TaggerError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or(TaggerError::PipeUnavailable("stdin"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or(TaggerError::PipeUnavailable("stdout"))?;

        tracing::info!("Started tagger `{}`", command);
        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

impl Tagger for MecabTagger {
    fn tokenize(&mut self, line: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        // MeCab answers one EOS per input line
        let sentence = line.replace(['\r', '\n', '\t'], " ");
        writeln!(self.stdin, "{sentence}")?;
        self.stdin.flush()?;

        let mut tokens = Vec::new();
        let mut row = String::new();
        loop {
            row.clear();
            if self.stdout.read_line(&mut row)? == 0 {
                return Err(TaggerError::UnexpectedEof);
            }
            let row = row.trim_end_matches(['\r', '\n']);
            if row == END_OF_SENTENCE {
                break;
            }
            tokens.extend(parse_row(row));
        }

        Ok(tokens)
    }
}

impl Drop for MecabTagger {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            tracing::debug!("Tagger already exited: {}", e);
        }
        let _ = self.child.wait();
    }
}

/// Parse MeCab's default output for a single sentence, up to the first `EOS`
pub fn parse_mecab_output(output: &str) -> Vec<TaggedToken> {
    output
        .lines()
        .take_while(|row| *row != END_OF_SENTENCE)
        .filter_map(parse_row)
        .collect()
}

fn parse_row(row: &str) -> Option<TaggedToken> {
    let (surface, features) = row.split_once('\t')?;
    Some(TaggedToken::new(surface, features))
}
