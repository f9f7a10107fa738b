/// A macro for config structs defined in `matmul-viz`. This macro generates a function that
/// can insert toml comments created from doc comments on fields.
///
/// # Attributes
/// - `#[child = true]`: writes the doc comments for all fields in the child struct.
///
/// # Invariants
/// Required for this macro to work:
///
/// - struct must implement [`Default`] and `serde`
/// - None of the fields can be [`Option`]
///
/// # Documentation
/// Fields are documented like so, the table is optional:
///
/// ```rust
/// struct Config {
///     /// BRIEF DESCRIPTION.
///     ///
///     /// Type         | FIELD TYPE
///     /// Valid values | EXPRESSION REPRESENTING VALID VALUES
///     /// Examples     | (optional) A FEW EXAMPLE VALUES
///     field: (),
/// }
/// ```
///
/// Keep lines under ~70 characters, they end up in the generated config.
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[child = $child:literal])?
                $(#[doc = $doc:expr])*
                $(##[$field_meta:meta])*
                pub $field:ident: $field_ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[doc = $doc])*
                $(#[$field_meta])*
                pub $field: $field_ty,
            )*
        }

        impl $name {
            /// Write the doc comments of every field into `doc` as toml comments.
            ///
            /// Fields missing from `doc` are skipped.
            pub fn write_docs(doc: &mut dyn ::toml_edit::TableLike) {
                $(
                    {
                        let key_str = stringify!($field);

                        let field_prefix = [ $(
                            format!("##{}\n", $doc),
                        )*].concat();

                        $(
                        if $child {
                            if let Some(child) = doc
                                .get_mut(key_str)
                                .and_then(::toml_edit::Item::as_table_like_mut)
                            {
                                <$field_ty>::write_docs(child);
                            }
                        }
                        )?

                        if let Some(table) = doc.get_mut(key_str).and_then(::toml_edit::Item::as_table_mut) {
                            table.decor_mut().set_prefix(format!("\n{field_prefix}"));
                        } else if let Some(mut key) = doc.key_mut(key_str) {
                            key.leaf_decor_mut().set_prefix(field_prefix);
                        }
                    }
                )*
            }
        }
    };
}

pub(crate) use config_struct;
