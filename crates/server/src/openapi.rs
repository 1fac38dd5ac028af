//! Static OpenAPI document. Response schemas are written by hand and mirror
//! the entity columns; they are not generated from the models.
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthDoc { pub status: String }

#[derive(ToSchema)]
pub struct VehicleDoc {
    pub vehicle_id: i32,
    pub brand: String,
    pub client_id: i32,
    pub created_at: String,
    pub license_plate: String,
    pub model: String,
    pub year: i32,
}

#[derive(ToSchema)]
pub struct WorkDoc {
    pub work_id: i32,
    pub cost: f64,
    pub created_at: String,
    pub description: String,
    pub end_date: String,
    pub start_date: String,
    pub status: Option<String>,
    pub vehicle_id: i32,
}

#[derive(ToSchema)]
pub struct TaskDoc {
    pub task_id: i32,
    pub description: String,
    pub employee_id: i32,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub work_id: i32,
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct InvoiceDoc {
    pub invoice_id: i32,
    pub client_id: i32,
    pub issued_at: String,
    pub iva: f64,
    pub total: f64,
    pub total_with_iva: f64,
}

#[derive(ToSchema)]
pub struct InvoiceItemDoc {
    pub item_id: i32,
    pub cost: f64,
    pub description: String,
    pub invoice_id: i32,
    pub task_id: i32,
}

#[derive(ToSchema)]
pub struct SettingDoc {
    pub setting_id: i32,
    pub key_name: String,
    pub value: String,
    pub updated_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::vehicles::list,
        crate::vehicles::create,
        crate::vehicles::get,
        crate::vehicles::update,
        crate::vehicles::delete,
        crate::works::list,
        crate::works::create,
        crate::works::get,
        crate::works::update,
        crate::works::delete,
        crate::tasks::list,
        crate::tasks::create,
        crate::tasks::get,
        crate::tasks::update,
        crate::tasks::delete,
        crate::invoices::list,
        crate::invoices::create,
        crate::invoices::get,
        crate::invoices::update,
        crate::invoices::delete,
        crate::invoice_items::list,
        crate::invoice_items::create,
        crate::invoice_items::get,
        crate::invoice_items::update,
        crate::invoice_items::delete,
        crate::settings::list,
        crate::settings::create,
        crate::settings::get,
        crate::settings::update,
        crate::settings::delete,
    ),
    components(
        schemas(
            HealthDoc,
            VehicleDoc,
            WorkDoc,
            TaskDoc,
            InvoiceDoc,
            InvoiceItemDoc,
            SettingDoc,
            crate::vehicles::VehicleInput,
            crate::works::WorkInput,
            crate::tasks::TaskInput,
            crate::invoices::CreateInvoiceInput,
            crate::invoices::UpdateInvoiceInput,
            crate::invoice_items::InvoiceItemInput,
            crate::settings::SettingInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "vehicle", description = "CRUD operations for managing vehicles"),
        (name = "work", description = "CRUD operations for managing works"),
        (name = "task", description = "CRUD operations for managing tasks"),
        (name = "invoice", description = "CRUD operations for managing invoices"),
        (name = "invoice_item", description = "CRUD operations for managing invoice items"),
        (name = "setting", description = "CRUD operations for managing settings")
    )
)]
pub struct ApiDoc;
