use scholar_core::enums::Vocabulary;

/// Resolve a user-typed label against a closed vocabulary.
///
/// Case is ignored and `-`/`_` stand in for spaces, so `not-applied` and
/// `Not Applied` both name the same status.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: Vocabulary,
{
    T::parse_label(raw).ok_or_else(|| {
        let accepted = T::all()
            .iter()
            .map(|value| value.label())
            .filter(|label| !label.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::anyhow!("invalid {field} '{raw}' (expected one of: {accepted})")
    })
}

/// [`parse_enum`] over every value, failing on the first bad one.
pub fn parse_enums<T, C>(raws: &[String], field: &str) -> anyhow::Result<C>
where
    T: Vocabulary,
    C: FromIterator<T>,
{
    raws.iter().map(|raw| parse_enum(raw, field)).collect()
}
