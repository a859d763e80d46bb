use crate::lookup::lookup_name;

lookup_name! {
    /// Encoding of an uploaded survey image.
    pub enum ImageTypeName {
        Gif => "GIF",
        Jpeg => "JPEG",
        Png => "PNG",
    }
}
