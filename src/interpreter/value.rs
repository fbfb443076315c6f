/// Three-valued truth values.
///
/// Defines the `Ternary` type used for every Lej value: the constants `T` and
/// `F`, and truth tables over unsure atoms. Includes negation, conjunction and
/// disjunction together with the doubling, halving and collapse steps that
/// keep tables in canonical form.
pub mod ternary;
