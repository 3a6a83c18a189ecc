/// Outcome of copying a result set into a caller-sized output slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fetch {
    /// Every result fit; holds how many were written.
    Complete(usize),
    /// The output was full before the results ran out. `written` slots hold
    /// valid results; `total` is how many there were.
    Truncated { written: usize, total: usize },
}

impl Fetch {
    /// Copies as many of `results` into `out` as fit. Slots past the
    /// written prefix are left untouched.
    pub fn copy_into<V: Copy>(results: &[V], out: &mut [V]) -> Self {
        let written = results.len().min(out.len());
        out[..written].copy_from_slice(&results[..written]);

        if written < results.len() {
            Fetch::Truncated {
                written,
                total: results.len(),
            }
        } else {
            Fetch::Complete(written)
        }
    }

    pub fn written(&self) -> usize {
        match self {
            Fetch::Complete(written) => *written,
            Fetch::Truncated { written, .. } => *written,
        }
    }

    pub fn total(&self) -> usize {
        match self {
            Fetch::Complete(total) => *total,
            Fetch::Truncated { total, .. } => *total,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Fetch::Truncated { .. })
    }
}
