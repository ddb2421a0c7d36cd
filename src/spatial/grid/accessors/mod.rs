mod velocity;
mod cells;
mod pointers;
