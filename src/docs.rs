use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::script::handler::generate_script,
        crate::modules::image::handler::generate_images,
        crate::modules::image::handler::regenerate_segment_image,
        crate::modules::voice::handler::generate_voice,
    ),
    components(
        schemas(
            crate::modules::script::dto::GenerateScriptRequest,
            crate::modules::script::dto::ScriptStageResponse,
            crate::modules::script::model::Script,
            crate::modules::script::model::Segment,
            crate::modules::image::dto::GenerateImagesRequest,
            crate::modules::image::dto::ImageStageResponse,
            crate::modules::image::dto::SegmentImageResult,
            crate::modules::image::dto::RegenerateSegmentRequest,
            crate::modules::image::dto::RegenerateSegmentResponse,
            crate::modules::voice::dto::GenerateVoiceRequest,
            crate::modules::voice::dto::VoiceStageResponse,
        )
    ),
    tags(
        (name = "Videos", description = "Script, image and voice generation")
    )
)]
pub struct ApiDoc;
