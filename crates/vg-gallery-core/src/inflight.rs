use std::collections::HashSet;

/// Ids with an outstanding deletion request.
#[derive(Debug, Default)]
pub struct InFlight {
    ids: HashSet<String>,
}

impl InFlight {
    /// Returns `false` when `id` is already pending; the caller must not send.
    pub fn begin(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_owned())
    }

    pub fn finish(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
