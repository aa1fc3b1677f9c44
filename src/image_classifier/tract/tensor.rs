use crate::image_classifier::preprocess::PixelBuffer;
use tract_onnx::prelude::*;

/// Converts the xRGB buffer into an NHWC `[1, height, width, 3]` f32 tensor,
/// dropping the skip byte and scaling each channel into [0, 1].
pub fn pixel_buffer_to_tensor(buffer: &PixelBuffer) -> Tensor {
    let tensor = tract_ndarray::Array4::from_shape_fn(
        (1, buffer.height() as usize, buffer.width() as usize, 3),
        |(_, y, x, c)| buffer.rgb(x as u32, y as u32)[c] as f32 / 255.0,
    );

    tensor.into_tensor()
}
