use crate::classify::media::MediaKind;
use crate::classify::rules::Classifier;
use crate::classify::table::{self, KEYFRAMES_KEY, TYPE_TAG_KEY};
use crate::foundation::core::{PassKind, ScaleFactor};
use crate::transform::numeric::{self, Rounding, ScaleContext, ScaleOutcome};
use crate::tree::node::{Map, Node};
use crate::tree::path::PropertyPath;

/// Counters collected during one walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Numeric leaves and arrays rewritten.
    pub scaled: usize,
    /// Fields left unscaled by the duration-preserving media policy.
    pub exempt: usize,
}

/// Recursive rewrite of a project tree for one pass.
///
/// The walker never mutates its input. Objects and arrays with nothing to rewrite are returned
/// as the input allocation, so the output tree shares every untouched branch.
#[derive(Clone, Debug)]
pub struct TreeWalker<'c> {
    kind: PassKind,
    factor: ScaleFactor,
    preserve_audio_duration: bool,
    classifier: &'c Classifier,
}

struct WalkState<'n> {
    path: PropertyPath<'n>,
    media: Option<MediaKind>,
    in_keyframe: bool,
    stats: WalkStats,
}

impl<'c> TreeWalker<'c> {
    /// Walker for `kind` scaling by `factor`, preserving audio durations.
    pub fn new(kind: PassKind, factor: ScaleFactor, classifier: &'c Classifier) -> Self {
        Self {
            kind,
            factor,
            preserve_audio_duration: true,
            classifier,
        }
    }

    /// Toggle the duration-preserving media exception of the temporal pass.
    pub fn preserve_audio_duration(mut self, preserve: bool) -> Self {
        self.preserve_audio_duration = preserve;
        self
    }

    /// Rewrite `root`, returning the new tree and what was changed.
    pub fn walk(&self, root: &Node) -> (Node, WalkStats) {
        let mut st = WalkState {
            path: PropertyPath::root(),
            media: None,
            in_keyframe: false,
            stats: WalkStats::default(),
        };
        let out = self.node(root, &mut st).unwrap_or_else(|| root.clone());
        (out, st.stats)
    }

    // `None` means "unchanged"; callers keep the original node.
    fn node<'n>(&self, node: &'n Node, st: &mut WalkState<'n>) -> Option<Node> {
        match node {
            Node::Object(map) => self.object(map, st),
            Node::Array(items) => {
                let mut out: Option<Vec<Node>> = None;
                for (i, item) in items.iter().enumerate() {
                    st.path.push_index(i);
                    let replaced = self.node(item, st);
                    st.path.pop();
                    if let Some(new) = replaced {
                        out.get_or_insert_with(|| items.to_vec())[i] = new;
                    }
                }
                out.map(Node::array)
            }
            _ => None,
        }
    }

    fn object<'n>(&self, map: &'n Map, st: &mut WalkState<'n>) -> Option<Node> {
        let saved_media = st.media;
        if let Some(tag) = map.get(TYPE_TAG_KEY).and_then(Node::as_str) {
            st.media = Some(MediaKind::from_type_tag(tag));
        }

        let mut out: Option<Map> = None;
        for (i, (key, value)) in map.iter().enumerate() {
            if let Some(new) = self.entry(key, value, st) {
                let buf = out.get_or_insert_with(|| map.clone());
                if let Some((_, slot)) = buf.get_index_mut(i) {
                    *slot = new;
                }
            }
        }

        st.media = saved_media;
        out.map(Node::object)
    }

    fn entry<'n>(&self, key: &'n str, value: &'n Node, st: &mut WalkState<'n>) -> Option<Node> {
        if self.classifier.is_excluded(key, &st.path) {
            return None;
        }

        if self.kind == PassKind::Spatial
            && let (Some(fields), Node::Object(def)) = (table::self_contained_fields(key), value)
        {
            st.path.push_key(key);
            let out = self.definition(def, fields, st);
            st.path.pop();
            return out;
        }

        let category = self.classifier.classify(key, &st.path);
        if category.pass() == Some(self.kind) {
            let ctx = ScaleContext {
                key,
                media: st.media,
                preserve_audio_duration: self.preserve_audio_duration,
                in_keyframe: st.in_keyframe,
            };
            match numeric::scale(value, self.factor, category, &ctx) {
                ScaleOutcome::Scaled(new) => return self.record(key, value, new, st),
                ScaleOutcome::Exempt => {
                    st.stats.exempt += 1;
                    tracing::debug!(path = %st.path, key, media = ?st.media, "duration kept");
                    return None;
                }
                ScaleOutcome::NotApplicable => {}
            }
        }

        st.path.push_key(key);
        let was_keyframe = std::mem::replace(&mut st.in_keyframe, false);
        let out = match value {
            Node::Array(items) if key == KEYFRAMES_KEY => self.keyframes(items, st),
            _ => self.node(value, st),
        };
        st.in_keyframe = was_keyframe;
        st.path.pop();
        out
    }

    // Keyframe entries are scaled against the property owning the list, already on the path.
    fn keyframes<'n>(&self, items: &'n [Node], st: &mut WalkState<'n>) -> Option<Node> {
        let mut out: Option<Vec<Node>> = None;
        for (i, item) in items.iter().enumerate() {
            st.path.push_index(i);
            st.in_keyframe = item.as_object().is_some();
            let replaced = self.node(item, st);
            st.in_keyframe = false;
            st.path.pop();
            if let Some(new) = replaced {
                out.get_or_insert_with(|| items.to_vec())[i] = new;
            }
        }
        out.map(Node::array)
    }

    fn definition<'n>(
        &self,
        def: &'n Map,
        fields: &[&str],
        st: &mut WalkState<'n>,
    ) -> Option<Node> {
        let mut out: Option<Map> = None;
        for (i, (key, value)) in def.iter().enumerate() {
            if !fields.contains(&key.as_str()) || self.classifier.is_excluded(key, &st.path) {
                continue;
            }
            let Some(new) = numeric::scale_number(value, self.factor, Rounding::HalfEven) else {
                continue;
            };
            if let Some(new) = self.record(key, value, new, st) {
                let buf = out.get_or_insert_with(|| def.clone());
                if let Some((_, slot)) = buf.get_index_mut(i) {
                    *slot = new;
                }
            }
        }
        out.map(Node::object)
    }

    fn record<'n>(
        &self,
        key: &'n str,
        before: &Node,
        after: Node,
        st: &mut WalkState<'n>,
    ) -> Option<Node> {
        st.stats.scaled += 1;
        st.path.push_key(key);
        tracing::trace!(path = %st.path, before = %before, after = %after, "scaled");
        st.path.pop();
        (after != *before).then_some(after)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/walker.rs"]
mod tests;
