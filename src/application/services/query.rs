//! Query processing service
//!
//! Combines a question with data coming either from a single argument
//! or from a line-oriented stream, writing one answer per data unit.

use std::io::{BufRead, Write};

use tracing::{debug, instrument, trace};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Answer, DataUnit, DomainError, Question};

/// Where the data units come from.
#[derive(Debug)]
pub enum DataSource<R> {
    /// Positional argument (argument mode); `None` when it was not supplied.
    Argument(Option<String>),
    /// Line-oriented input (stream mode).
    Stream(R),
}

/// Behavior switches for [`QueryService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Write the raw question once before the answers in stream mode.
    pub echo_question: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            echo_question: true,
        }
    }
}

/// Outcome of one processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuerySummary {
    /// Number of answer lines written (the echoed question is not counted)
    pub answers: usize,
}

/// Service answering a question against argument or stream data.
#[derive(Debug, Clone, Default)]
pub struct QueryService {
    options: QueryOptions,
}

impl QueryService {
    /// Create a new query service.
    pub fn new(options: QueryOptions) -> Self {
        Self { options }
    }

    /// Answer `question` for every data unit of `source`, writing one line per answer.
    ///
    /// The question is validated before anything is read or written.
    /// Read or write failures abort the run.
    #[instrument(level = "debug", skip(self, source, out))]
    pub fn process<R: BufRead, W: Write>(
        &self,
        question: Option<&str>,
        source: DataSource<R>,
        out: &mut W,
    ) -> ApplicationResult<QuerySummary> {
        let question = Question::from_option(question)?;

        let answers = match source {
            DataSource::Argument(data) => self.process_argument(&question, data, out)?,
            DataSource::Stream(reader) => self.process_stream(&question, reader, out)?,
        };

        out.flush().with_io_context(|| "flush output".into())?;
        debug!("process: wrote {} answers", answers);
        Ok(QuerySummary { answers })
    }

    /// Lazily answer `question` for each line of `reader`.
    pub fn answers<'q, R: BufRead>(&self, question: &'q Question, reader: R) -> Answers<'q, R> {
        Answers {
            question,
            reader,
            line_no: 0,
            buf: Vec::new(),
            failed: false,
        }
    }

    fn process_argument<W: Write>(
        &self,
        question: &Question,
        data: Option<String>,
        out: &mut W,
    ) -> ApplicationResult<usize> {
        let data = data.ok_or(DomainError::MissingData)?;
        let answer = question.answer(&DataUnit::new(data));
        writeln!(out, "{answer}").with_io_context(|| "write result".into())?;
        Ok(1)
    }

    fn process_stream<R: BufRead, W: Write>(
        &self,
        question: &Question,
        reader: R,
        out: &mut W,
    ) -> ApplicationResult<usize> {
        if self.options.echo_question {
            writeln!(out, "{question}").with_io_context(|| "write question".into())?;
        }

        let mut written = 0;
        for answer in self.answers(question, reader) {
            let answer = answer?;
            written += 1;
            writeln!(out, "{answer}").with_io_context(|| format!("write result {written}"))?;
        }
        Ok(written)
    }
}

/// Iterator over the answers for a line-oriented reader.
///
/// Yields one item per line; a read error is yielded once and ends the iteration.
pub struct Answers<'q, R> {
    question: &'q Question,
    reader: R,
    line_no: usize,
    buf: Vec<u8>,
    failed: bool,
}

impl<R: BufRead> Iterator for Answers<'_, R> {
    type Item = ApplicationResult<Answer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.buf.clear();
        self.line_no += 1;
        let line_no = self.line_no;

        match self
            .reader
            .read_until(b'\n', &mut self.buf)
            .with_io_context(|| format!("read input line {line_no}"))
        {
            Ok(0) => None,
            Ok(_) => {
                // Invalid UTF-8 becomes U+FFFD instead of ending the stream
                let data = DataUnit::from_line(&String::from_utf8_lossy(&self.buf));
                trace!("line {}: {:?}", line_no, data.as_str());
                Some(Ok(self.question.answer(&data)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
