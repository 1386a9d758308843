/// Configuration macros for single-declaration config structs
///
/// `config_struct!` takes field name, type and default in one place and
/// generates the struct with public fields, its `Default` impl and serde
/// support with `#[serde(default)]`, so a partial TOML file fills the gaps
/// from the embedded defaults.
///
/// # Example
/// ```
/// funding_ledger::config_struct! {
///     pub struct FeedConfig {
///         page_size: usize = 1000,
///         max_offset: usize = 10_000,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
