use heck::{
    ToKebabCase, ToLowerCamelCase, ToPascalCase, ToShoutyKebabCase, ToShoutySnakeCase,
    ToSnakeCase, ToTitleCase, ToUpperCamelCase,
};
use liquid_core::{Filter, Result, Runtime, Value, ValueView};

macro_rules! create_case_filter {
    ($name:ident, $filter_name:tt, $description:tt, $expr:expr) => {
        paste::paste! {
            #[derive(Clone, liquid_derive::ParseFilter, liquid_derive::FilterReflection)]
            #[filter(
                name = $filter_name,
                description = $description,
                parsed([<$name Filter>])
            )]
            pub struct [<$name FilterParser>];

            #[derive(Debug, Default, liquid_derive::Display_filter)]
            #[name = $filter_name]
            struct [<$name Filter>];

            impl Filter for [<$name Filter>] {
                fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
                    let input = input.to_kstr().to_string();
                    let f: fn(&str) -> String = $expr;
                    Ok(Value::scalar(f(&input)))
                }
            }
        }
    };
}

create_case_filter!(
    KebabCase,
    "kebab_case",
    "Change text to kebab-case.",
    |s| s.to_kebab_case()
);
create_case_filter!(
    LowerCamelCase,
    "lower_camel_case",
    "Change text to lowerCamelCase.",
    |s| s.to_lower_camel_case()
);
create_case_filter!(
    PascalCase,
    "pascal_case",
    "Change text to PascalCase.",
    |s| s.to_pascal_case()
);
create_case_filter!(
    ShoutyKebabCase,
    "shouty_kebab_case",
    "Change text to SHOUTY-KEBAB-CASE.",
    |s| s.to_shouty_kebab_case()
);
create_case_filter!(
    ShoutySnakeCase,
    "shouty_snake_case",
    "Change text to SHOUTY_SNAKE_CASE.",
    |s| s.to_shouty_snake_case()
);
create_case_filter!(
    SnakeCase,
    "snake_case",
    "Change text to snake_case.",
    |s| s.to_snake_case()
);
create_case_filter!(
    TitleCase,
    "title_case",
    "Change text to Title Case.",
    |s| s.to_title_case()
);
create_case_filter!(
    UpperCamelCase,
    "upper_camel_case",
    "Change text to UpperCamelCase.",
    |s| s.to_upper_camel_case()
);
