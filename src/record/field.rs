//! Field adapters used by `#[derive(Record)]`.

/// A field that contributes text to free-text search.
pub trait SearchField {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a str>);
}

impl SearchField for String {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(self.as_str());
    }
}

impl SearchField for &'static str {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(*self);
    }
}

impl<T: SearchField> SearchField for Option<T> {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(value) = self {
            value.collect_into(out);
        }
    }
}

impl<T: SearchField> SearchField for Vec<T> {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        for value in self {
            value.collect_into(out);
        }
    }
}

/// A field that can be checked for the "required field empty" condition.
pub trait RequiredField {
    fn is_blank(&self) -> bool;
}

impl RequiredField for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T> RequiredField for Option<T> {
    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

impl<T> RequiredField for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}
