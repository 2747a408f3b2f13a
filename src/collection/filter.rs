use std::fmt;

/// Classification filter: everything, or one exact classification value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassFilter<C> {
    All,
    Only(C),
}

impl<C> Default for ClassFilter<C> {
    fn default() -> Self {
        ClassFilter::All
    }
}

impl<C: Copy + Eq> ClassFilter<C> {
    pub fn matches(&self, value: C) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Only(wanted) => *wanted == value,
        }
    }

    /// Step through `All`, then each class in order, then back to `All`.
    pub fn cycle(self, classes: &[C]) -> Self {
        match self {
            ClassFilter::All => classes.first().map_or(ClassFilter::All, |c| ClassFilter::Only(*c)),
            ClassFilter::Only(current) => {
                let next = classes
                    .iter()
                    .position(|c| *c == current)
                    .and_then(|index| classes.get(index + 1));
                next.map_or(ClassFilter::All, |c| ClassFilter::Only(*c))
            }
        }
    }
}

impl<C: fmt::Display> fmt::Display for ClassFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassFilter::All => f.write_str("all"),
            ClassFilter::Only(value) => value.fmt(f),
        }
    }
}

/// Transient search/filter/page state driving a collection's derived view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<C> {
    pub search_text: String,
    pub class_filter: ClassFilter<C>,
    /// 1-based.
    pub current_page: usize,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            class_filter: ClassFilter::All,
            current_page: 1,
        }
    }
}
