use utoipa::OpenApi;

use crate::modules::health::HealthResponse;
use classbook_core::errors::ErrorResponse;
use classbook_core::{PaginationMeta, PaginationParams};
use classbook_models::{Student, StudentInput, StudentPatch, Teacher, TeacherInput, TeacherPatch};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::health_check,
        crate::modules::teachers::controller::list_teachers,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::partial_update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::students::controller::list_students,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::partial_update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            Teacher,
            TeacherInput,
            TeacherPatch,
            Student,
            StudentInput,
            StudentPatch,
            PaginationMeta,
            PaginationParams,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Teachers", description = "Teacher records"),
        (name = "Students", description = "Student records"),
        (name = "Health", description = "Liveness probe")
    ),
    info(
        title = "Classbook API",
        version = "0.1.0",
        description = "CRUD API for the teachers and students of a school",
    )
)]
pub struct ApiDoc;
