pub mod alert;
pub mod form;
pub mod layout;
pub mod logo;
pub mod pagination;
pub mod table;

pub use alert::{Alert, AlertData, AlertKind};
pub use form::{
    ButtonType, Field, FieldGroup, FieldRefresh, Form, FormButton, FormData, FormField, FormTarget,
};
pub use layout::{LayoutContext, render_admin_layout};
pub use logo::{Logo, LogoData, LogoSize, LogoVariant};
pub use pagination::{Pagination, PaginationData};
pub use table::{SortType, TableColumn, TableData, TableRow, render_table};
