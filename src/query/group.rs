use crate::record::Record;

/// One board column: every record whose facet has this label.
#[derive(Debug)]
pub struct Group<'a, R> {
    pub value: &'static str,
    pub records: Vec<&'a R>,
}

impl<R> Group<'_, R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Split records into columns by facet, one per legal label in declaration
/// order, empty columns included. Each column keeps input order.
///
/// Returns no columns when the type has no such facet.
pub fn group_by<'a, R, I>(records: I, facet: &str) -> Vec<Group<'a, R>>
where
    R: Record,
    I: IntoIterator<Item = &'a R>,
{
    let Some(values) = R::facet_values(facet) else {
        return Vec::new();
    };

    let mut groups: Vec<Group<'a, R>> = values
        .iter()
        .map(|value| Group {
            value: *value,
            records: Vec::new(),
        })
        .collect();

    for record in records {
        let Some(label) = record.facet(facet) else {
            continue;
        };
        if let Some(group) = groups.iter_mut().find(|g| g.value == label) {
            group.records.push(record);
        }
    }

    groups
}
