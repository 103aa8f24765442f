use metrics::{IntoLabels, Label, SharedString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key-value tags attached to every metric emitted by a generator.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)]) -> Self {
        Self(
            labels
                .iter()
                .cloned()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Clone the actual [Labels] with additional key-value labels. Additional labels replace
    /// existing ones with the same key.
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(
            additional_labels
                .iter()
                .cloned()
                .map(|(key, value)| (key.into(), value.into())),
        );
        Labels(tags)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
            .into_iter()
            .map(|(key, value)| Label::new(SharedString::from(key), SharedString::from(value)))
            .collect()
    }
}
