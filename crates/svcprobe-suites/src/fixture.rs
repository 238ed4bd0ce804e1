use svcprobe_config::FixtureConfig;
use svcprobe_core::{MultipartBody, ScratchFile};

/// Write the scratch file described by the fixture config
pub(crate) fn write_scratch(fixture: &FixtureConfig) -> svcprobe_core::Result<ScratchFile> {
    ScratchFile::write(&fixture.path, &fixture.content)
}

/// Multipart upload body read fresh from the scratch file
pub(crate) fn upload_form(fixture: &FixtureConfig, scratch: &ScratchFile) -> svcprobe_core::Result<MultipartBody> {
    Ok(MultipartBody {
        fields: fixture.fields.clone(),
        file: scratch.file_part(&fixture.field_name, &fixture.content_type)?,
    })
}
