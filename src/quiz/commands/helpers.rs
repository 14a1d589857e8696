use crate::error::{QuizError, Result};
use crate::model::QuizRecord;
use crate::store::{Persistence, QuizStore};
use crate::validation::validate_identifier;

/// Validates a raw id and turns it into a store index. Negative ids are invalid arguments.
pub fn resolve_index(raw: Option<&str>) -> Result<usize> {
    let id = validate_identifier(raw)?;
    usize::try_from(id).map_err(|_| QuizError::InvalidArgument(id))
}

/// Looks up a record for a handler, reporting a missing one as `NotFound`.
pub fn fetch<P: Persistence>(store: &QuizStore<P>, raw: Option<&str>) -> Result<(usize, QuizRecord)> {
    let id = validate_identifier(raw)?;
    let index = usize::try_from(id).map_err(|_| QuizError::NotFound(id))?;
    match store.get_by_index(index) {
        Ok(record) => Ok((index, record)),
        Err(QuizError::InvalidArgument(_)) => Err(QuizError::NotFound(id)),
        Err(e) => Err(e),
    }
}

pub fn describe(index: usize, record: &QuizRecord) -> String {
    format!("[{}]: {} => {}", index, record.question, record.answer)
}

/// Error lines for a failed command, one per field for validation failures.
pub fn error_messages(error: &QuizError) -> Vec<String> {
    match error {
        QuizError::Validation(fields) => std::iter::once("The quiz is invalid:".to_string())
            .chain(fields.iter().map(|f| format!("  {}: {}", f.field, f.message)))
            .collect(),
        other => vec![other.to_string()],
    }
}
