use convert_case::{Case, Casing};
use syn::{Attribute, Error, LitStr};

///
/// RenameRule
///

#[derive(Clone, Copy)]
pub enum RenameRule {
    Camel,
    Pascal,
    Snake,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self, Error> {
        match lit.value().as_str() {
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "snake_case" => Ok(Self::Snake),
            other => Err(Error::new_spanned(
                lit,
                format!("unknown rename_all rule {other:?}, expected PascalCase, camelCase, or snake_case"),
            )),
        }
    }

    pub fn apply(self, name: &str) -> String {
        let case = match self {
            Self::Camel => Case::Camel,
            Self::Pascal => Case::Pascal,
            Self::Snake => Case::Snake,
        };

        name.to_case(case)
    }
}

///
/// ContainerAttrs
///

#[derive(Default)]
pub struct ContainerAttrs {
    pub name: Option<String>,
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("record")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    out.name = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else if meta.path.is_ident("rename_all") {
                    out.rename_all = Some(RenameRule::parse(&meta.value()?.parse()?)?);
                    Ok(())
                } else {
                    Err(meta.error("unknown record attribute, expected `name` or `rename_all`"))
                }
            })?;
        }

        Ok(out)
    }
}

///
/// FieldAttrs
///

#[derive(Default)]
pub struct FieldAttrs {
    pub rename: Option<String>,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("record")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    out.rename = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown record field attribute, expected `rename`"))
                }
            })?;
        }

        Ok(out)
    }
}
