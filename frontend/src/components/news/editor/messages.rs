use common::model::news::News;

#[derive(Clone)]
pub enum Msg {
    SetTitle(String),
    SetSummary(String),
    SetCategory(String),
    SetPublished(bool),
    UpdateContent(String),
    Loaded(News),
    LoadFailed,
    OpenContentImagePicker,
    OpenCoverPicker,
    ContentImageSelected(web_sys::File),
    CoverSelected(web_sys::File),
    ContentImageUploaded(String),
    CoverUploaded(String),
    UploadFailed,
    /// Content textarea clicked with the caret at the given UTF-16 offset.
    ContentClicked(u32),
    SetSelectedAlt(String),
    DeleteSelectedImage,
    CloseImageDialog,
    Save,
    SaveSucceeded(News),
    SaveFailed,
}
