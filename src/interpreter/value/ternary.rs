use std::fmt;

/// Digit marking a row where the expression is true.
pub const TRUE_ROW: u8 = 2;
/// Digit marking a row where the expression is false.
pub const FALSE_ROW: u8 = 0;
/// Leading digit of every table value.
pub const TABLE_HEADER: u8 = 1;

/// A three-valued truth value.
///
/// Constants are single digits: `{2}` for true and `{0}` for false. Anything
/// built from one or more unsure atoms is a *table value*: the header digit
/// `1` followed by a truth table whose row count is a power of two of at least
/// two. Each row is `2` (true) or `0` (false), one row per assignment of the
/// unsure atoms involved.
///
/// Negation is the digit map `d -> 2 - d`, which swaps the two constants and
/// fixes the table header, so it needs no case analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ternary {
    digits: Vec<u8>,
}

impl Ternary {
    /// The constant `T`.
    #[must_use]
    pub fn truth() -> Self {
        Self { digits: vec![TRUE_ROW] }
    }

    /// The constant `F`.
    #[must_use]
    pub fn falsity() -> Self {
        Self { digits: vec![FALSE_ROW] }
    }

    /// Builds a table value from its rows.
    ///
    /// Returns `None` unless `rows` has a power-of-two length of at least two
    /// and every row is [`TRUE_ROW`] or [`FALSE_ROW`].
    ///
    /// # Example
    /// ```
    /// use lej::interpreter::value::ternary::Ternary;
    ///
    /// let t = Ternary::table(&[2, 0, 0, 0]).unwrap();
    /// assert_eq!(t.digits(), &[1, 2, 0, 0, 0]);
    ///
    /// assert!(Ternary::table(&[2, 0, 0]).is_none());
    /// assert!(Ternary::table(&[2]).is_none());
    /// assert!(Ternary::table(&[2, 1]).is_none());
    /// ```
    #[must_use]
    pub fn table(rows: &[u8]) -> Option<Self> {
        let well_formed = rows.len() >= 2
                          && rows.len().is_power_of_two()
                          && rows.iter().all(|&d| d == TRUE_ROW || d == FALSE_ROW);
        if !well_formed {
            return None;
        }

        let mut digits = Vec::with_capacity(rows.len() + 1);
        digits.push(TABLE_HEADER);
        digits.extend_from_slice(rows);
        Some(Self { digits })
    }

    /// The table of the `atom`-th unsure atom instantiated in a program.
    ///
    /// The table has `2 << (atom - 1)` rows: the first half true, the second
    /// half false. Atom `1` is `[2 0]`, atom `2` is `[2 2 0 0]`, and so on.
    /// `atom` is counted from one; zero is treated as one.
    ///
    /// # Example
    /// ```
    /// use lej::interpreter::value::ternary::Ternary;
    ///
    /// assert_eq!(Ternary::unsure_atom(1).rows(), &[2, 0]);
    /// assert_eq!(Ternary::unsure_atom(2).rows(), &[2, 2, 0, 0]);
    /// assert_eq!(Ternary::unsure_atom(3).rows().len(), 8);
    /// ```
    #[must_use]
    pub fn unsure_atom(atom: usize) -> Self {
        let len = 2usize << atom.saturating_sub(1);
        let half = len / 2;

        let mut digits = Vec::with_capacity(len + 1);
        digits.push(TABLE_HEADER);
        digits.extend(std::iter::repeat_n(TRUE_ROW, half));
        digits.extend(std::iter::repeat_n(FALSE_ROW, half));
        Self { digits }
    }

    /// The full digit sequence, header included for table values.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// The truth-table rows of a table value; empty for constants.
    #[must_use]
    pub fn rows(&self) -> &[u8] {
        if self.is_table() { &self.digits[1..] } else { &[] }
    }

    #[must_use]
    pub fn is_true(&self) -> bool {
        self.digits == [TRUE_ROW]
    }

    #[must_use]
    pub fn is_false(&self) -> bool {
        self.digits == [FALSE_ROW]
    }

    #[must_use]
    pub fn is_table(&self) -> bool {
        self.digits.len() > 1
    }

    /// Negation.
    ///
    /// # Example
    /// ```
    /// use lej::interpreter::value::ternary::Ternary;
    ///
    /// assert!(Ternary::truth().negate().is_false());
    ///
    /// let u = Ternary::unsure_atom(1);
    /// assert_eq!(u.negate().digits(), &[1, 0, 2]);
    /// assert_eq!(u.negate().negate(), u);
    /// ```
    #[must_use]
    pub fn negate(&self) -> Self {
        Self { digits: self.digits.iter().map(|d| TRUE_ROW - d).collect() }
    }

    /// Appends the rows of a table value to themselves. Constants are
    /// returned unchanged.
    ///
    /// `[1 2 0]` becomes `[1 2 0 2 0]`: the same expression viewed over one
    /// more atom it does not depend on.
    #[must_use]
    pub fn double(&self) -> Self {
        if !self.is_table() {
            return self.clone();
        }
        let mut digits = self.digits.clone();
        digits.extend_from_slice(self.rows());
        Self { digits }
    }

    /// Drops the second half of the rows when it repeats the first half.
    ///
    /// Two-row tables and constants are returned unchanged, as is any table
    /// whose halves differ. Only one halving step is taken.
    ///
    /// # Example
    /// ```
    /// use lej::interpreter::value::ternary::Ternary;
    ///
    /// let redundant = Ternary::table(&[2, 0, 2, 0]).unwrap();
    /// assert_eq!(redundant.halve().rows(), &[2, 0]);
    ///
    /// let needed = Ternary::table(&[2, 2, 0, 0]).unwrap();
    /// assert_eq!(needed.halve(), needed);
    /// ```
    #[must_use]
    pub fn halve(&self) -> Self {
        let rows = self.rows();
        if rows.len() <= 2 {
            return self.clone();
        }
        let (first, second) = rows.split_at(rows.len() / 2);
        if first != second {
            return self.clone();
        }
        Self { digits: self.digits[..=first.len()].to_vec() }
    }

    /// Collapses a table with no true row to the constant `F`.
    ///
    /// A formula that is classically contradictory is intuitionistically
    /// contradictory as well (Glivenko), so an all-false table carries no more
    /// information than `F` itself. Anything else is returned unchanged.
    #[must_use]
    pub fn glivenko_collapse(&self) -> Self {
        if self.is_table() && self.rows().iter().all(|&d| d == FALSE_ROW) {
            return Self::falsity();
        }
        self.clone()
    }

    /// Disjunction.
    ///
    /// `T` absorbs anything and `F` is the identity. Two tables are brought
    /// to the same row count by doubling the shorter one, combined row by row
    /// with `max`, then halved and collapsed.
    ///
    /// # Example
    /// ```
    /// use lej::interpreter::value::ternary::Ternary;
    ///
    /// let u = Ternary::unsure_atom(1);
    /// assert!(Ternary::truth().or(&u).is_true());
    /// assert_eq!(Ternary::falsity().or(&u), u);
    ///
    /// // U1 or U2 over rows (U1, U2): true unless both are false.
    /// let v = Ternary::unsure_atom(2);
    /// assert_eq!(u.or(&v).rows(), &[2, 2, 2, 0]);
    /// ```
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        if self.is_true() || other.is_true() {
            return Self::truth();
        }
        if self.is_false() {
            return other.clone();
        }
        if other.is_false() {
            return self.clone();
        }

        let mut a = self.clone();
        let mut b = other.clone();
        while a.digits.len() < b.digits.len() {
            a = a.double();
        }
        while b.digits.len() < a.digits.len() {
            b = b.double();
        }

        let digits = a.digits.iter().zip(&b.digits).map(|(x, y)| *x.max(y)).collect();
        Self { digits }.halve().glivenko_collapse()
    }

    /// Conjunction.
    ///
    /// `F` absorbs anything and `T` is the identity. Two tables are padded to
    /// the same row count, combined row by row with `min`, then collapsed.
    /// Unlike [`Ternary::or`] the result is not halved.
    ///
    /// While the left operand is the shorter one it is halved before each
    /// doubling. When that halving succeeds the doubled table would be the
    /// operand again, so the step falls back to a plain doubling.
    ///
    /// # Example
    /// ```
    /// use lej::interpreter::value::ternary::Ternary;
    ///
    /// let u = Ternary::unsure_atom(1);
    /// assert!(Ternary::falsity().and(&u).is_false());
    /// assert_eq!(Ternary::truth().and(&u), u);
    ///
    /// // U and not U has no true row left.
    /// assert!(u.and(&u.negate()).is_false());
    /// ```
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        if self.is_false() || other.is_false() {
            return Self::falsity();
        }
        if self.is_true() {
            return other.clone();
        }
        if other.is_true() {
            return self.clone();
        }

        let mut a = self.clone();
        let mut b = other.clone();
        while a.digits.len() < b.digits.len() {
            let grown = a.halve().double();
            a = if grown.digits.len() > a.digits.len() { grown } else { a.double() };
        }
        while b.digits.len() < a.digits.len() {
            b = b.double();
        }

        let digits = a.digits.iter().zip(&b.digits).map(|(x, y)| *x.min(y)).collect();
        Self { digits }.glivenko_collapse()
    }
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_true() {
            return f.write_str("T");
        }
        if self.is_false() {
            return f.write_str("F");
        }
        let rows = self.rows().iter().map(u8::to_string).collect::<Vec<_>>();
        write!(f, "U[{}]", rows.join(" "))
    }
}
