//! Numeric bounds and their human-readable descriptions
//!
//! Bound descriptions follow a fixed grammar:
//! - lower + upper: `must be >= L and <= U` (operators per inclusivity)
//! - lower only: `must be >= L` / `must be > L`
//! - upper only: `must be <= U` / `must be < U`

/// One endpoint of a numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    /// Endpoint value
    pub limit: f64,
    /// Whether values are allowed to equal `limit`
    pub inclusive: bool,
}

impl Bound {
    /// Create an inclusive endpoint
    pub fn inclusive(limit: f64) -> Self {
        Self {
            limit,
            inclusive: true,
        }
    }

    /// Create an exclusive endpoint
    pub fn exclusive(limit: f64) -> Self {
        Self {
            limit,
            inclusive: false,
        }
    }
}

/// Optional lower/upper limits on a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl Bounds {
    /// No limits in either direction
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// `value >= limit`
    pub fn at_least(limit: f64) -> Self {
        Self {
            lower: Some(Bound::inclusive(limit)),
            upper: None,
        }
    }

    /// `value > limit`
    pub fn greater_than(limit: f64) -> Self {
        Self {
            lower: Some(Bound::exclusive(limit)),
            upper: None,
        }
    }

    /// `value <= limit`
    pub fn at_most(limit: f64) -> Self {
        Self {
            lower: None,
            upper: Some(Bound::inclusive(limit)),
        }
    }

    /// `value < limit`
    pub fn less_than(limit: f64) -> Self {
        Self {
            lower: None,
            upper: Some(Bound::exclusive(limit)),
        }
    }

    /// `lower <= value <= upper`
    pub fn between(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(Bound::inclusive(lower)),
            upper: Some(Bound::inclusive(upper)),
        }
    }

    /// `lower < value < upper`
    pub fn between_exclusive(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(Bound::exclusive(lower)),
            upper: Some(Bound::exclusive(upper)),
        }
    }

    /// Checks a value against the bounds; on violation returns the bound
    /// description for the error message.
    pub fn check(&self, value: f64) -> Result<(), String> {
        if let Some(lower) = self.lower {
            let ok = if lower.inclusive {
                value >= lower.limit
            } else {
                value > lower.limit
            };
            if !ok {
                return Err(self.description());
            }
        }
        if let Some(upper) = self.upper {
            let ok = if upper.inclusive {
                value <= upper.limit
            } else {
                value < upper.limit
            };
            if !ok {
                return Err(self.description());
            }
        }
        Ok(())
    }

    /// Describes the bound condition, e.g. `must be >= 0 and <= 42`.
    pub fn description(&self) -> String {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => desc_between(lower, upper),
            (Some(lower), None) => desc_lower(lower),
            (None, Some(upper)) => desc_upper(upper),
            (None, None) => String::new(),
        }
    }
}

fn desc_lower(bound: Bound) -> String {
    format!(
        "must be {} {}",
        if bound.inclusive { ">=" } else { ">" },
        bound.limit
    )
}

fn desc_upper(bound: Bound) -> String {
    format!(
        "must be {} {}",
        if bound.inclusive { "<=" } else { "<" },
        bound.limit
    )
}

fn desc_between(lower: Bound, upper: Bound) -> String {
    format!(
        "{} and {} {}",
        desc_lower(lower),
        if upper.inclusive { "<=" } else { "<" },
        upper.limit
    )
}
