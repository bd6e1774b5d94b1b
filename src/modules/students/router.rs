use crate::modules::students::controller::{
    create_student, delete_student, get_student, list_students, partial_update_student,
    update_student,
};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/{id}",
            get(get_student)
                .put(update_student)
                .patch(partial_update_student)
                .delete(delete_student),
        )
}
