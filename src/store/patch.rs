/// A mutation applied to one record by id.
///
/// Any `Fn(&mut R)` is a patch, so one-off edits can be written inline:
///
/// ```ignore
/// store.update_by_id("lead-1", &|lead: &mut Lead| lead.value = 9_000)?;
/// ```
///
/// Set-style patches (assigning fields) are idempotent. Append-style patches
/// (adding a reply to a thread) are not, and callers apply them once.
///
/// Workflow patches override [`Patch::check`] to refuse actions the record's
/// current status does not allow. A refused patch is never applied.
pub trait Patch<R> {
    fn apply(&self, record: &mut R);

    /// Reason this patch cannot be applied to `record`, if any.
    fn check(&self, _record: &R) -> Result<(), String> {
        Ok(())
    }
}

impl<R, F> Patch<R> for F
where
    F: Fn(&mut R),
{
    fn apply(&self, record: &mut R) {
        self(record)
    }
}

/// Replaces the whole record, used when an edit form is saved.
#[derive(Debug, Clone)]
pub struct Replace<R>(pub R);

impl<R: Clone> Patch<R> for Replace<R> {
    fn apply(&self, record: &mut R) {
        *record = self.0.clone();
    }
}
