use crate::enum_table::{CanonicalValue, EnumForm, EnumKey, EnumMember, EnumTable};
use crate::error::EnumError;

/// Find the table entry for a code or a name.
///
/// A string that parses as an integer is tried as a code first, so `"0"` and
/// `0` resolve the same way. Names match regardless of case.
#[track_caller]
pub fn resolve<'a>(key: impl Into<EnumKey<'a>>, table: &EnumTable) -> Result<EnumMember, EnumError> {
    let key = key.into();

    let found = match &key {
        EnumKey::Code(code) => table.name_of(*code).map(|name| EnumMember { name, code: *code }),
        EnumKey::Name(raw) => {
            let trimmed = raw.trim();
            let by_code = trimmed
                .parse::<i64>()
                .ok()
                .and_then(|code| table.name_of(code).map(|name| EnumMember { name, code }));

            by_code.or_else(|| {
                let upper = trimmed.to_uppercase();
                table
                    .members
                    .iter()
                    .find(|(name, _)| *name == upper)
                    .map(|(name, code)| EnumMember {
                        name: *name,
                        code: *code,
                    })
            })
        }
    };

    found.ok_or_else(|| EnumError::unknown_key(key.to_string(), table.description))
}

/// Resolve `key` and return it in the form the table's endpoints expect.
#[track_caller]
pub fn normalize<'a>(
    key: impl Into<EnumKey<'a>>,
    table: &EnumTable,
) -> Result<CanonicalValue, EnumError> {
    let member = resolve(key, table)?;
    Ok(match table.form {
        EnumForm::Code => CanonicalValue::Code(member.code),
        EnumForm::Name => CanonicalValue::Name(member.name),
    })
}

/// Normalize a list, stopping at the first unknown key.
#[track_caller]
pub fn resolve_many<'a, K, I>(keys: I, table: &EnumTable) -> Result<Vec<CanonicalValue>, EnumError>
where
    K: Into<EnumKey<'a>>,
    I: IntoIterator<Item = K>,
{
    keys.into_iter().map(|key| normalize(key, table)).collect()
}

/// Comma-join canonical values for list-valued query parameters.
pub fn join(values: &[CanonicalValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
