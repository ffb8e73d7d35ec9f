use log::debug;

use crate::quiz::definition::TopicTag;


const KNOWN_TOPICS: &[(&str, &str)] = &[
    ("html", "HTML"),
    ("css", "CSS"),
    ("javascript", "JavaScript"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicSelection {
    pub tag: TopicTag,
    pub display_name: String,
    pub enabled: bool,
}

impl TopicSelection {
    pub fn new(tag: TopicTag, display_name: String) -> Self {
        TopicSelection {
            tag,
            display_name,
            enabled: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicSelector {
    selections: Vec<TopicSelection>,
}

impl Default for TopicSelector {
    fn default() -> Self {
        let selections = KNOWN_TOPICS
            .iter()
            .map(|(tag, name)| TopicSelection::new(TopicTag::from(*tag), (*name).to_owned()))
            .collect();
        TopicSelector { selections }
    }
}

impl TopicSelector {
    pub fn empty() -> Self {
        TopicSelector {
            selections: Vec::new(),
        }
    }

    pub fn get_selections(&self) -> &Vec<TopicSelection> {
        &self.selections
    }

    /// Adds an enabled selection for every tag not already known.
    pub fn extend<I: IntoIterator<Item = TopicTag>>(&mut self, tags: I) {
        for tag in tags {
            if self.find(&tag).is_none() {
                let display_name = tag.as_str().to_owned();
                self.selections.push(TopicSelection::new(tag, display_name));
            }
        }
    }

    /// Returns whether a selection matched the tag.
    pub fn toggle(&mut self, tag: &TopicTag) -> bool {
        match self.selections.iter_mut().find(|s| s.tag == *tag) {
            Some(selection) => {
                selection.enabled = !selection.enabled;
                true
            }
            None => {
                debug!("Ignoring toggle of unknown topic `{}`", tag);
                false
            }
        }
    }

    pub fn is_enabled(&self, tag: &TopicTag) -> bool {
        self.find(tag).map(|s| s.enabled).unwrap_or(false)
    }

    pub fn any_enabled(&self) -> bool {
        self.selections.iter().any(|s| s.enabled)
    }

    fn find(&self, tag: &TopicTag) -> Option<&TopicSelection> {
        self.selections.iter().find(|s| s.tag == *tag)
    }
}
