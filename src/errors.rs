use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn too_many_weeks(max: usize) -> Self {
        Self::bad_request(format!("num_weeks must be at most {max}"))
    }

    pub fn cell_out_of_range(week: usize, day: usize) -> Self {
        Self::bad_request(format!("cell ({week}, {day}) is outside the table"))
    }

    pub fn week_out_of_range(week: usize) -> Self {
        Self::bad_request(format!("week {week} is outside the table"))
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
