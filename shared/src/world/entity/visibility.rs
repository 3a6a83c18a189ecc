/// Visibility override for an entity, globally or towards a single owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// No override; chunk and dimension matching decides.
    #[default]
    Default,
    Never,
    Always,
}

impl Visibility {
    /// Picks the override that applies: an owner-specific one wins unless it
    /// is `Default`, in which case the global one is used.
    pub fn resolve(owner: Visibility, global: Visibility) -> Visibility {
        match owner {
            Visibility::Default => global,
            specific => specific,
        }
    }
}
