use crate::modules::teachers::controller::{
    create_teacher, delete_teacher, get_teacher, list_teachers, partial_update_teacher,
    update_teacher,
};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers).post(create_teacher))
        .route(
            "/{id}",
            get(get_teacher)
                .put(update_teacher)
                .patch(partial_update_teacher)
                .delete(delete_teacher),
        )
}
