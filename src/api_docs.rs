use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::circulation::checkout,
        api::circulation::checkin,
        api::books::list_books,
        api::books::create_book,
        api::books::get_book,
        api::books::delete_book,
        api::students::list_students,
        api::students::create_student,
        api::students::get_student,
        api::students::delete_student,
        api::teachers::list_teachers,
        api::teachers::create_teacher,
        api::teachers::get_teacher,
        api::teachers::delete_teacher,
        api::loan::list_loans,
        api::loan::list_active_loans,
        api::loan::create_loan,
        api::loan::get_loan,
        api::loan::update_loan_status,
        api::loan::delete_loan,
    ),
    components(schemas(
        api::circulation::CheckoutRequest,
        api::circulation::CheckinRequest,
        api::books::CreateBookRequest,
        api::students::CreateStudentRequest,
        api::teachers::CreateTeacherRequest,
        api::loan::CreateLoanRequest,
        api::loan::UpdateLoanStatusRequest,
    )),
    tags(
        (name = "school-library", description = "School library circulation and records API")
    )
)]
pub struct ApiDoc;
