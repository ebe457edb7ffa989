use ringcap::error::RingCapResult;
use ringcap::BoundedRingBuffer;

fn main() -> RingCapResult<()> {
    env_logger::init();

    println!("ringcap bounded FIFO buffer demo");
    println!("================================");

    demonstrate_overflow()?;
    demonstrate_drain()?;
    demonstrate_peek()?;

    println!("\nDone.");
    Ok(())
}

fn demonstrate_overflow() -> RingCapResult<()> {
    println!("\nOverflow and eviction:");
    println!("----------------------");

    let mut buffer = BoundedRingBuffer::new(3)?;

    println!("1. Enqueue 1, 2, 3 into a buffer of capacity 3...");
    buffer.enqueue(1);
    buffer.enqueue(2);
    buffer.enqueue(3);
    println!("   contents: {:?}", buffer.iter().collect::<Vec<_>>());

    println!("2. Enqueue 4 into the full buffer...");
    buffer.enqueue(4);
    println!("   the oldest element was evicted");
    println!("   contents: {:?}", buffer.iter().collect::<Vec<_>>());

    println!("3. Dequeue...");
    println!("   got {:?}", buffer.dequeue());
    println!("   contents: {:?}", buffer.iter().collect::<Vec<_>>());

    Ok(())
}

fn demonstrate_drain() -> RingCapResult<()> {
    println!("\nDraining to empty:");
    println!("------------------");

    let mut buffer = BoundedRingBuffer::new(1)?;

    println!("1. Enqueue 5, then 6, into a buffer of capacity 1...");
    buffer.enqueue(5);
    buffer.enqueue(6);
    println!("   contents: {:?}", buffer.iter().collect::<Vec<_>>());

    println!("2. Dequeue twice...");
    println!("   got {:?}", buffer.dequeue());
    println!("   got {:?} (empty buffer, not an error)", buffer.dequeue());

    Ok(())
}

fn demonstrate_peek() -> RingCapResult<()> {
    println!("\nPeeking without removal:");
    println!("------------------------");

    let mut buffer = BoundedRingBuffer::new(2)?;

    println!("1. Enqueue 1...");
    buffer.enqueue(1);
    println!("   peek: {:?}", buffer.peek());

    println!("2. Enqueue 2 and 3...");
    buffer.enqueue(2);
    buffer.enqueue(3);
    println!("   contents: {:?}", buffer.iter().collect::<Vec<_>>());
    println!("   peek: {:?}", buffer.peek());
    println!("   length is still {}", buffer.len());

    Ok(())
}
