/// 帧缓冲区实现，存储渲染结果
///
/// 行主序的RGB缓冲区，(0,0)位于左上角。整个渲染过程为单线程顺序写入，
/// 所有分形实例共享同一个缓冲区，后写入的像素直接覆盖先写入的。
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    /// 存储RGB颜色值 [0, 255]，类型为u8，初始为全黑
    color_buffer: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            color_buffer: vec![0u8; width * height * 3],
        }
    }

    /// 向指定像素写入颜色，越界坐标静默丢弃
    ///
    /// 边界判定为严格不等式：第0行、第0列与最大边界均视为越界，
    /// 不会被绘制。
    pub fn set_pixel(&mut self, row: i32, col: i32, color: [u8; 3]) {
        if col > 0 && col < self.width as i32 && row > 0 && row < self.height as i32 {
            let index = (row as usize * self.width + col as usize) * 3;
            self.color_buffer[index..index + 3].copy_from_slice(&color);
        }
    }

    /// 读取指定像素的颜色，越界返回None
    pub fn get_pixel(&self, row: usize, col: usize) -> Option<[u8; 3]> {
        if row < self.height && col < self.width {
            let index = (row * self.width + col) * 3;
            Some([
                self.color_buffer[index],
                self.color_buffer[index + 1],
                self.color_buffer[index + 2],
            ])
        } else {
            None
        }
    }

    /// 获取颜色缓冲区的字节数据
    pub fn get_color_buffer_bytes(&self) -> &[u8] {
        &self.color_buffer
    }
}
