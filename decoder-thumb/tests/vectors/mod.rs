mod stream;
mod wide;
