use yew::prelude::*;

/// Properties for the `NewsEditor`.
#[derive(Properties, PartialEq, Clone)]
pub struct NewsEditorProps {
    /// Article to edit. `None` starts a new article; saving it creates the
    /// record and switches the editor to update mode.
    ///
    /// Read once, on the first render.
    #[prop_or_default]
    pub news_id: Option<i64>,
}
