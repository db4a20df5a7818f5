// Linkstack display components
// Components compose managers into the operations a host page drives.

pub mod bookmark_widget;
