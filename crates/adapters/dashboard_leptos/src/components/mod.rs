mod device_list;
mod loading;
mod toast;

pub use device_list::DeviceList;
pub use loading::Loading;
pub use toast::{ToastContainer, ToastProvider, use_toasts};
